use crate::presentation::TuiRenderer;
use anyhow::Result;
use blogdeck_client::HttpClient;
use blogdeck_engine::ViewController;
use tokio::runtime::Runtime;

pub fn handle(rt: &Runtime, client: HttpClient) -> Result<()> {
    tracing::info!(base_url = client.base_url(), "starting interactive UI");
    let mut controller = ViewController::new(client);
    TuiRenderer::new().run(rt, &mut controller)
}
