use std::process;

use anyhow::{bail, Context, Result};
use clap::{Arg, Command};
use ndarray::{ArrayD, IxDyn};

use tdcodec::core::{color, dct::DctCodec, media::MediaTool, rle, scan, types::WaveletKind, wavelet};

fn main() {
    env_logger::init();

    let matches = Command::new("tdcodec CLI")
        .version("0.1.0")
        .about("변환 영역 코딩 파이프라인 CLI 도구")
        .subcommand_required(true)
        .subcommand(
            Command::new("color")
                .about("RGB를 YUV로 변환하고 다시 RGB로 복원")
                .arg(Arg::new("r").required(true).help("R 성분 (0-255)"))
                .arg(Arg::new("g").required(true).help("G 성분 (0-255)"))
                .arg(Arg::new("b").required(true).help("B 성분 (0-255)")),
        )
        .subcommand(
            Command::new("rle")
                .about("문자열 런길이 부호화")
                .arg(Arg::new("input").required(true).help("압축할 문자열")),
        )
        .subcommand(
            Command::new("serpentine")
                .about("정사각 행렬의 지그재그 스캔")
                .arg(
                    Arg::new("matrix")
                        .required(true)
                        .help("JSON 2차원 배열 (예: [[1,2],[3,4]])"),
                ),
        )
        .subcommand(
            Command::new("dct-encode")
                .about("순방향 DCT (ortho)")
                .arg(Arg::new("array").required(true).help("JSON 1차원 또는 2차원 배열")),
        )
        .subcommand(
            Command::new("dct-decode")
                .about("역방향 DCT (ortho)")
                .arg(Arg::new("array").required(true).help("JSON 1차원 또는 2차원 배열")),
        )
        .subcommand(
            Command::new("dwt")
                .about("1레벨 웨이블릿 분해 후 서브밴드 출력")
                .arg(
                    Arg::new("matrix")
                        .required(true)
                        .help("JSON 2차원 배열 (짝수 크기)"),
                ),
        )
        .subcommand(Command::new("ffmpeg-version").about("외부 ffmpeg 버전 확인"))
        .get_matches();

    let result = match matches.subcommand() {
        Some(("color", sub)) => run_color(sub),
        Some(("rle", sub)) => run_rle(sub),
        Some(("serpentine", sub)) => run_serpentine(sub),
        Some(("dct-encode", sub)) => run_dct(sub, true),
        Some(("dct-decode", sub)) => run_dct(sub, false),
        Some(("dwt", sub)) => run_dwt(sub),
        Some(("ffmpeg-version", _)) => run_ffmpeg_version(),
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("오류: {:#}", e);
        process::exit(1);
    }
}

fn run_color(sub: &clap::ArgMatches) -> Result<()> {
    let r: f64 = get_parsed(sub, "r")?;
    let g: f64 = get_parsed(sub, "g")?;
    let b: f64 = get_parsed(sub, "b")?;
    let (y, u, v) = color::rgb_to_yuv(r, g, b);
    let (r2, g2, b2) = color::yuv_to_rgb(y, u, v);
    println!("YUV: ({:.3}, {:.3}, {:.3})", y, u, v);
    println!("복원 RGB: ({:.3}, {:.3}, {:.3})", r2, g2, b2);
    Ok(())
}

fn run_rle(sub: &clap::ArgMatches) -> Result<()> {
    let input = get_str(sub, "input")?;
    let tokens = rle::encode(input);
    println!("{}", serde_json::to_string(&tokens)?);
    Ok(())
}

fn run_serpentine(sub: &clap::ArgMatches) -> Result<()> {
    let matrix = parse_matrix(get_str(sub, "matrix")?)?;
    let sequence = scan::linearize(&matrix)?;
    println!("{}", serde_json::to_string(&sequence)?);
    Ok(())
}

fn run_dct(sub: &clap::ArgMatches, forward: bool) -> Result<()> {
    let array = parse_tensor(get_str(sub, "array")?)?;
    let mut codec = DctCodec::new();
    let result = if forward {
        codec.forward(&array)?
    } else {
        codec.inverse(&array)?
    };
    println!("{}", tensor_to_json(&result)?);
    Ok(())
}

fn run_dwt(sub: &clap::ArgMatches) -> Result<()> {
    let matrix = parse_matrix(get_str(sub, "matrix")?)?.mapv(|v| v as f32);
    let subbands = wavelet::analyze(&matrix, WaveletKind::Bior13)?;
    for (name, band) in subbands.bands() {
        let rows: Vec<Vec<f32>> = band.rows().into_iter().map(|r| r.to_vec()).collect();
        println!("{}: {}", name, serde_json::to_string(&rows)?);
    }
    Ok(())
}

fn run_ffmpeg_version() -> Result<()> {
    let tool = MediaTool::default();
    let version = tool.version().context("ffmpeg 실행 실패")?;
    println!("{}", version);
    Ok(())
}

fn get_str<'a>(sub: &'a clap::ArgMatches, name: &str) -> Result<&'a str> {
    sub.get_one::<String>(name)
        .map(|s| s.as_str())
        .with_context(|| format!("{} 인자가 없음", name))
}

fn get_parsed(sub: &clap::ArgMatches, name: &str) -> Result<f64> {
    get_str(sub, name)?
        .parse()
        .with_context(|| format!("{} 인자를 숫자로 해석할 수 없음", name))
}

fn parse_matrix(input: &str) -> Result<ndarray::Array2<f64>> {
    let rows: Vec<Vec<f64>> =
        serde_json::from_str(input).context("JSON 2차원 배열을 기대함")?;
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|row| row.len() != ncols) {
        bail!("행 길이가 서로 다름");
    }
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    ndarray::Array2::from_shape_vec((nrows, ncols), flat)
        .context("행렬 구성 실패")
}

fn parse_tensor(input: &str) -> Result<ArrayD<f64>> {
    let value: serde_json::Value = serde_json::from_str(input).context("JSON 배열을 기대함")?;
    match value {
        serde_json::Value::Array(items) if items.first().map_or(false, |v| v.is_array()) => {
            Ok(parse_matrix(input)?.into_dyn())
        }
        serde_json::Value::Array(_) => {
            let flat: Vec<f64> = serde_json::from_str(input)?;
            let len = flat.len();
            ArrayD::from_shape_vec(IxDyn(&[len]), flat).context("배열 구성 실패")
        }
        _ => bail!("JSON 배열이 아님"),
    }
}

fn tensor_to_json(tensor: &ArrayD<f64>) -> Result<String> {
    match tensor.ndim() {
        1 => Ok(serde_json::to_string(&tensor.iter().copied().collect::<Vec<f64>>())?),
        2 => {
            let matrix = tensor
                .view()
                .into_dimensionality::<ndarray::Ix2>()
                .context("2차원 변환 실패")?;
            let rows: Vec<Vec<f64>> = matrix.rows().into_iter().map(|r| r.to_vec()).collect();
            Ok(serde_json::to_string(&rows)?)
        }
        n => bail!("{}차원 출력은 지원하지 않음", n),
    }
}
