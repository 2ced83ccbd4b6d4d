//! N차원 분리형 DCT (type-II 순방향 / type-III 역방향, ortho 정규화)
//!
//! 1차원 커널을 축 0부터 마지막 축까지 차례로 적용한다. 각 패스는 직전
//! 패스의 출력에 작용하므로 역변환은 반드시 역순으로 풀어야 한다.
//! rustdct 커널은 비정규화 형태라 ortho 스케일 인자를 직접 곱한다.

use ndarray::{Array1, ArrayD, Axis};
use rustdct::{DctPlanner, TransformType2And3};

use crate::core::error::CodecError;

/// 분리형 DCT 코덱
pub struct DctCodec {
    // planner는 재사용 가능하므로 코덱이 소유하는 것이 효율적
    planner: DctPlanner<f64>,
}

impl DctCodec {
    pub fn new() -> Self {
        Self {
            planner: DctPlanner::new(),
        }
    }

    /// 순방향 변환: 축 0 → 축 N−1 순서로 1차원 DCT-II 적용
    ///
    /// # Arguments
    /// * `array` - 임의 차원의 실수 배열 (모든 축 길이 1 이상)
    ///
    /// # Returns
    /// 같은 형태의 계수 배열. 에너지는 보존된다 (유니터리).
    pub fn forward(&mut self, array: &ArrayD<f64>) -> Result<ArrayD<f64>, CodecError> {
        validate(array)?;
        let mut result = array.clone();
        for axis in 0..result.ndim() {
            self.dct2_axis(&mut result, axis);
        }
        Ok(result)
    }

    /// 역방향 변환: 축 N−1 → 축 0 역순으로 1차원 DCT-III 적용
    pub fn inverse(&mut self, array: &ArrayD<f64>) -> Result<ArrayD<f64>, CodecError> {
        validate(array)?;
        let mut result = array.clone();
        for axis in (0..result.ndim()).rev() {
            self.dct3_axis(&mut result, axis);
        }
        Ok(result)
    }

    fn dct2_axis(&mut self, data: &mut ArrayD<f64>, axis: usize) {
        let n = data.len_of(Axis(axis));
        let dct = self.planner.plan_dct2(n);
        // ortho: c[0] *= sqrt(1/N), c[k>0] *= sqrt(2/N)
        let scale_dc = (1.0 / n as f64).sqrt();
        let scale_ac = (2.0 / n as f64).sqrt();
        for mut lane in data.lanes_mut(Axis(axis)) {
            let mut buf = lane.to_vec();
            dct.process_dct2(&mut buf);
            buf[0] *= scale_dc;
            for value in buf.iter_mut().skip(1) {
                *value *= scale_ac;
            }
            lane.assign(&Array1::from(buf));
        }
    }

    fn dct3_axis(&mut self, data: &mut ArrayD<f64>, axis: usize) {
        let n = data.len_of(Axis(axis));
        let dct = self.planner.plan_dct3(n);
        // DCT-III가 0.5*c[0]을 더하므로 DC 사전 스케일은 2/sqrt(N)
        let scale_dc = 2.0 / (n as f64).sqrt();
        let scale_ac = (2.0 / n as f64).sqrt();
        for mut lane in data.lanes_mut(Axis(axis)) {
            let mut buf = lane.to_vec();
            buf[0] *= scale_dc;
            for value in buf.iter_mut().skip(1) {
                *value *= scale_ac;
            }
            dct.process_dct3(&mut buf);
            lane.assign(&Array1::from(buf));
        }
    }
}

impl Default for DctCodec {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(array: &ArrayD<f64>) -> Result<(), CodecError> {
    for (axis, &len) in array.shape().iter().enumerate() {
        if len == 0 {
            return Err(CodecError::InvalidShape(format!(
                "축 {}의 길이가 0",
                axis
            )));
        }
    }
    if array.iter().any(|value| !value.is_finite()) {
        return Err(CodecError::InvalidInput(
            "배열에 비유한(NaN/∞) 원소가 있음".to_string(),
        ));
    }
    Ok(())
}
