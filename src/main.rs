use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, Instrument};

use storefront::app_system::{setup_tracing, ShopConfig, ShopSystem};
use storefront::domain::{CartAction, OrderStatus, PageRequest, SessionId};

/// Runs a short shopping session against an in-process shop.
#[derive(Debug, Parser)]
#[command(name = "storefront", version, about)]
struct Args {
    /// TOML file with a `[shop]` table
    #[arg(long)]
    config: Option<PathBuf>,

    /// Demo products to create, overriding `shop.seed_products`
    #[arg(long)]
    seed: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();
    let args = Args::parse();

    let mut config = ShopConfig::load(args.config.as_deref()).context("loading configuration")?;
    if let Some(seed) = args.seed {
        config.seed_products = seed;
    }
    let seed = config.seed_products.max(2);
    info!(seed, default_user = %config.default_user, "Starting storefront");

    let system = ShopSystem::new(&config);

    system
        .catalog_client
        .seed_products(seed)
        .instrument(tracing::info_span!("seeding"))
        .await?;
    let products = system.catalog_client.all_products().await?;
    let (first, second) = match products.as_slice() {
        [first, second, ..] => (first.clone(), second.clone()),
        _ => anyhow::bail!("catalog has fewer than two products"),
    };

    let session = SessionId::shared();
    let span = tracing::info_span!("shopping", session = %session);
    async {
        for id in [first.id, first.id, second.id] {
            let view = system.cart_client.add_item(session.clone(), id).await?;
            info!(message = ?view.message, total = %view.total, "Cart updated");
        }
        let view = system
            .cart_client
            .update_item(session.clone(), first.id, CartAction::Subtract)
            .await?;
        info!(lines = view.lines.len(), total = %view.total, "Cart adjusted");
        anyhow::Ok(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("checkout");
    let receipt = async {
        info!("Placing order");
        system
            .cart_client
            .place_order(session.clone(), config.default_user_id())
            .await
    }
    .instrument(span)
    .await;

    match receipt {
        Ok(receipt) => {
            info!(order_id = %receipt.order_id, total = %receipt.total, "Order placed");
            system
                .order_client
                .update_status(receipt.order_id, OrderStatus::Shipped)
                .await?;
            let order = system
                .order_client
                .get_order_with_products(receipt.order_id, &system.catalog_client)
                .await?;
            info!(status = %order.status, items = order.items.len(), total = %order.total, "Order shipped");
        }
        Err(e) => error!(error = %e, kind = ?e.kind(), "Checkout failed"),
    }

    let page = system
        .order_client
        .order_page(PageRequest::new(Some(1), i64::try_from(config.page_size).ok()))
        .await?;
    info!(orders = page.items.len(), pages = page.total_pages, "Order history");

    system.shutdown().await.map_err(anyhow::Error::msg)?;
    info!("Storefront stopped");
    Ok(())
}
