use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use facecapture_core::dataset::dataset_writer::DatasetWriter;
use facecapture_core::detection::domain::face_detector::FaceDetector;
use facecapture_core::detection::infrastructure::seeta_detector::SeetaDetector;
use facecapture_core::pipeline::detect_faces_use_case::DetectFacesUseCase;
use facecapture_core::pipeline::face_request::FaceRequest;
use facecapture_core::pipeline::face_response::FaceResponse;
use facecapture_core::shared::constants::{DEFAULT_DATASET_DIR, SEETA_MODEL_NAME, SEETA_MODEL_URL};
use facecapture_core::shared::model_resolver;

/// Face detection and labeled crop capture for single images.
///
/// Prints the result payload as JSON on stdout.
#[derive(Parser)]
#[command(name = "facecapture")]
struct Cli {
    /// Input image file (the binary-upload input form).
    image: Option<PathBuf>,

    /// File containing a raw base64 or data-URL image payload.
    #[arg(long)]
    base64_file: Option<PathBuf>,

    /// JSON request body file: {"imageBase64": "...", "username": "..."}.
    #[arg(long)]
    request: Option<PathBuf>,

    /// Label the detected faces and persist crops under this username.
    #[arg(long)]
    username: Option<String>,

    /// Root directory for persisted face crops.
    #[arg(long, default_value = DEFAULT_DATASET_DIR)]
    dataset_dir: PathBuf,

    /// Path to a local SeetaFace model file (skips the cached download).
    #[arg(long)]
    model: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let request = build_request(&cli)?;
    let detector = build_detector(&cli)?;
    let mut use_case = DetectFacesUseCase::new(detector, DatasetWriter::new(&cli.dataset_dir));

    let result = use_case.execute(&request);
    let failed = result.is_err();
    if let Err(ref e) = result {
        if e.is_client_error() {
            log::warn!("request rejected: {e}");
        } else {
            log::error!("request failed: {e}");
        }
    }

    let response = FaceResponse::from(result);
    println!("{}", serde_json::to_string(&response)?);

    if failed {
        process::exit(1);
    }
    Ok(())
}

/// Assembles the request from the CLI's input forms. A JSON body is
/// read first so explicit flags can override its fields; binary image
/// bytes take precedence over any base64 payload inside the pipeline.
fn build_request(cli: &Cli) -> Result<FaceRequest, Box<dyn std::error::Error>> {
    let mut request: FaceRequest = match &cli.request {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => FaceRequest::default(),
    };

    if let Some(path) = &cli.base64_file {
        request.image_base64 = Some(fs::read_to_string(path)?.trim_end().to_string());
    }
    if let Some(path) = &cli.image {
        request.image = Some(fs::read(path)?);
    }
    if cli.username.is_some() {
        request.username = cli.username.clone();
    }

    Ok(request)
}

fn build_detector(cli: &Cli) -> Result<Box<dyn FaceDetector>, Box<dyn std::error::Error>> {
    let model_path = match &cli.model {
        Some(path) => path.clone(),
        None => {
            let path = model_resolver::resolve(
                SEETA_MODEL_NAME,
                SEETA_MODEL_URL,
                None,
                Some(Box::new(download_progress)),
            )?;
            eprintln!();
            path
        }
    };
    Ok(Box::new(SeetaDetector::from_model_file(&model_path)?))
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading face detection model... {pct}%");
    } else {
        eprint!("\rDownloading face detection model... {downloaded} bytes");
    }
}
