//! 사용자 저장소 서비스 실행 파일
//!
//! 설정된 저장소(MongoDB 또는 인메모리)를 열고 사용자 컬렉션 상태를 보고합니다.

use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_storage_service::config::{StorageBackend, StorageConfig};
use user_storage_service::errors::AppResult;
use user_storage_service::services::users::UserService;

#[tokio::main]
async fn main() {
    load_env_file();
    init_logging();

    info!("🚀 사용자 저장소 서비스 시작중...");

    if let Err(e) = run().await {
        error!("❌ 사용자 저장소 초기화 실패: {}", e);
        std::process::exit(1);
    }
}

/// 저장소에 연결하고 활성 사용자 수를 보고합니다
async fn run() -> AppResult<()> {
    let config = StorageConfig::from_env();

    match config.backend {
        StorageBackend::Mongo => info!(
            "📡 데이터베이스 연결 중... ({} / {})",
            config.database_name, config.collection_name
        ),
        StorageBackend::Memory => info!("🧪 인메모리 저장소 사용 (종료 시 데이터가 사라집니다)"),
    }

    let user_service = UserService::connect(&config).await?;
    let activated = user_service.count_activated_users().await?;

    info!("✅ 활성화된 사용자 수: {}", activated);
    Ok(())
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    // 로거 초기화 전이므로 표준 에러로 출력
    match loaded {
        Ok(file) => eprintln!("[{}] {} 파일 로드 됨", profile, file),
        Err(e) => eprintln!("[{}] 환경 파일 로드 실패: {}", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info")
///
/// ```bash
/// RUST_LOG=user_storage_service=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
}
