use intern_portal::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    intern_portal::start_server().await
}
