#[tokio::main]
async fn main() {
    nfl_picks_be::start_server().await;
}
