// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::Extension;
use newsrs::config::settings::Settings;
use newsrs::domain::news::source::PageSource;
use newsrs::engines::hn_source::HackerNewsSource;
use newsrs::infrastructure::cache::page_cache::PageCache;
use newsrs::infrastructure::news::aggregator::NewsAggregator;
use newsrs::presentation::routes;
use newsrs::utils::telemetry;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting newsrs...");

    // Initialize Prometheus Metrics
    newsrs::infrastructure::metrics::init_metrics();

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Initialize Components
    let source: Arc<dyn PageSource> = Arc::new(HackerNewsSource::new(
        &settings.upstream.base_url,
        &settings.upstream.user_agent,
        Duration::from_secs(settings.upstream.timeout_secs),
    )?);
    let cache = Arc::new(PageCache::new());
    let aggregator = Arc::new(NewsAggregator::new(
        source,
        cache,
        settings.aggregator.page_timeout_ms,
    ));
    info!("Aggregator initialized for {}", settings.upstream.base_url);

    // 4. Start HTTP server
    let app = routes::routes()
        .layer(Extension(aggregator))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
