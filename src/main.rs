mod browser;
mod config;
mod query;
mod registry;
mod rpc;
mod translate;

use anyhow::Result;

use config::Config;
use query::Action;
use registry::RegistryClient;

#[tokio::main]
async fn main() {
    env_logger::init();

    // Wox 每次调用只传一个 JSON 参数，缺失时无事可做
    let Some(raw) = std::env::args().nth(1) else {
        return;
    };

    // 所有失败统一退化为"无输出"：宿主把空 stdout 当作没有匹配结果，
    // 比崩溃或残缺 JSON 更友好
    if let Err(e) = run(&raw).await {
        log::warn!("本次调用失败: {:#}", e);
    }
}

async fn run(raw: &str) -> Result<()> {
    let config = Config::load_or_default()?;
    let request = rpc::parse_request(raw)?;

    match query::classify(&request)? {
        Action::OpenBrowser(name) => {
            browser::open_result_page(&name);
        }
        Action::Detail(name) => {
            let detail = RegistryClient::new().package_size(&name).await?;
            let items = translate::detail_items(&config, &name, &detail);
            rpc::send_result_items(&items)?;
        }
        Action::Suggest(q) => {
            if !query::should_suggest(&q) {
                return Ok(());
            }
            let suggestions = RegistryClient::new().suggest(&q).await?;
            let items = translate::suggestion_items(&config, &suggestions);
            rpc::send_result_items(&items)?;
        }
    }

    Ok(())
}
