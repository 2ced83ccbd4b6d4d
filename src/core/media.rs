//! 외부 미디어 도구(ffmpeg/ffprobe) 호출
//!
//! 리사이즈, 코덱 변환, 크로마 서브샘플링, 메타데이터 조회는 외부
//! 트랜스코더에 위임한다. 연산별 인자 목록은 고정이며, 실패 신호는
//! 종료 코드와 stderr 텍스트가 전부다. 바이너리 경로는 환경변수가 아닌
//! 명시적 설정값으로 받는다.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde::{Deserialize, Serialize};

use crate::core::error::CodecError;

/// 변환 대상 코덱 포맷
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodecFormat {
    Vp9,
    Vp8,
    H265,
    Av1,
}

impl CodecFormat {
    /// 포맷 관례상의 컨테이너 확장자
    pub fn container_extension(self) -> &'static str {
        match self {
            CodecFormat::Vp9 | CodecFormat::Vp8 => "webm",
            CodecFormat::H265 | CodecFormat::Av1 => "mp4",
        }
    }
}

/// 인코딩 래더 한 단 (출력 이름, 해상도, 코덱)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LadderRung {
    pub filename: &'static str,
    pub width: u32,
    pub height: u32,
    pub format: CodecFormat,
}

/// 기본 인코딩 래더 정의
pub const ENCODING_LADDER: [LadderRung; 4] = [
    LadderRung { filename: "360p_vp9.webm", width: 640, height: 360, format: CodecFormat::Vp9 },
    LadderRung { filename: "540p_vp8.mp4", width: 960, height: 540, format: CodecFormat::Vp8 },
    LadderRung { filename: "720p_h265.mp4", width: 1280, height: 720, format: CodecFormat::H265 },
    LadderRung { filename: "1080p_av1.mp4", width: 1920, height: 1080, format: CodecFormat::Av1 },
];

/// 외부 도구 설정 및 실행기
#[derive(Debug, Clone)]
pub struct MediaTool {
    pub ffmpeg_bin: String,
    pub ffprobe_bin: String,
}

impl Default for MediaTool {
    fn default() -> Self {
        Self {
            ffmpeg_bin: "ffmpeg".to_string(),
            ffprobe_bin: "ffprobe".to_string(),
        }
    }
}

impl MediaTool {
    /// 리사이즈 인자 목록
    pub fn resize_args(input: &str, width: u32, height: u32, output: &str) -> Vec<String> {
        vec![
            "-y".into(),
            "-i".into(),
            input.into(),
            "-vf".into(),
            format!("scale={}:{}", width, height),
            output.into(),
        ]
    }

    /// 코덱 변환 인자 목록 (포맷별 고정)
    pub fn convert_args(input: &str, format: CodecFormat, output: &str) -> Vec<String> {
        let codec_args: &[&str] = match format {
            CodecFormat::Vp9 => &["-c:v", "libvpx-vp9", "-b:v", "2M", "-c:a", "libopus"],
            CodecFormat::Vp8 => &["-c:v", "libvpx", "-b:v", "1M", "-c:a", "libvorbis"],
            CodecFormat::H265 => &["-c:v", "libx265", "-vtag", "hvc1", "-c:a", "aac"],
            CodecFormat::Av1 => &["-c:v", "libaom-av1", "-crf", "30", "-c:a", "aac"],
        };
        let mut args: Vec<String> = vec!["-y".into(), "-i".into(), input.into()];
        args.extend(codec_args.iter().map(|s| s.to_string()));
        args.push(output.into());
        args
    }

    /// 흑백 + 최대 압축 인자 목록
    pub fn grayscale_args(input: &str, output: &str) -> Vec<String> {
        vec![
            "-y".into(),
            "-i".into(),
            input.into(),
            "-vf".into(),
            "format=gray".into(),
            "-q:v".into(),
            "31".into(),
            output.into(),
        ]
    }

    /// 크로마 서브샘플링(yuv422p) 인자 목록
    pub fn chroma_subsampling_args(input: &str, output: &str) -> Vec<String> {
        vec![
            "-y".into(),
            "-i".into(),
            input.into(),
            "-vf".into(),
            "format=yuv422p".into(),
            "-c:v".into(),
            "libx264".into(),
            output.into(),
        ]
    }

    /// ffprobe 메타데이터 조회 인자 목록
    pub fn probe_args(input: &str) -> Vec<String> {
        vec![
            "-v".into(),
            "quiet".into(),
            "-print_format".into(),
            "json".into(),
            "-show_format".into(),
            "-show_streams".into(),
            input.into(),
        ]
    }

    /// ffmpeg 버전 문자열 (첫 줄)
    pub fn version(&self) -> Result<String, CodecError> {
        let output = self.run(&self.ffmpeg_bin, &["-version".to_string()])?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.lines().next().unwrap_or_default().to_string())
    }

    pub fn resize(
        &self,
        input: &str,
        width: u32,
        height: u32,
        output: &str,
    ) -> Result<(), CodecError> {
        self.run(&self.ffmpeg_bin, &Self::resize_args(input, width, height, output))?;
        Ok(())
    }

    pub fn convert(
        &self,
        input: &str,
        format: CodecFormat,
        output: &str,
    ) -> Result<(), CodecError> {
        self.run(&self.ffmpeg_bin, &Self::convert_args(input, format, output))?;
        Ok(())
    }

    pub fn grayscale_max_compression(&self, input: &str, output: &str) -> Result<(), CodecError> {
        self.run(&self.ffmpeg_bin, &Self::grayscale_args(input, output))?;
        Ok(())
    }

    pub fn chroma_subsampling(&self, input: &str, output: &str) -> Result<(), CodecError> {
        self.run(&self.ffmpeg_bin, &Self::chroma_subsampling_args(input, output))?;
        Ok(())
    }

    /// 스트림/포맷 메타데이터를 JSON 텍스트로 반환
    pub fn probe(&self, input: &str) -> Result<String, CodecError> {
        let output = self.run(&self.ffprobe_bin, &Self::probe_args(input))?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// 인코딩 래더 실행: 단마다 리사이즈 후 코덱 변환
    ///
    /// 중간 스케일 파일은 출력 디렉토리에 남는다. 생성된 최종 출력
    /// 경로들을 래더 순서대로 반환한다.
    pub fn encoding_ladder(
        &self,
        input: &str,
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>, CodecError> {
        let mut outputs = Vec::with_capacity(ENCODING_LADDER.len());
        for rung in ENCODING_LADDER {
            let scaled = output_dir.join(format!("scaled_{}x{}.mp4", rung.width, rung.height));
            let scaled_str = scaled.to_string_lossy().into_owned();
            self.resize(input, rung.width, rung.height, &scaled_str)?;

            let out_path = output_dir.join(rung.filename);
            self.convert(&scaled_str, rung.format, &out_path.to_string_lossy())?;
            outputs.push(out_path);
        }
        Ok(outputs)
    }

    fn run(&self, bin: &str, args: &[String]) -> Result<Output, CodecError> {
        log::debug!("외부 도구 실행: {} {:?}", bin, args);
        let output = Command::new(bin).args(args).output()?;
        if !output.status.success() {
            return Err(CodecError::Tool {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(output)
    }
}
