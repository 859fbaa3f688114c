// Reference consumer - prints the activity feed from a snapshot file

use anyhow::{Context, Result};

use arcadex::{
    config::load,
    discover::sorted_recent,
    format_address,
    snapshot::Snapshot,
    when::{now_ms, relative},
};

fn main() -> Result<()> {
    // Load .env file if it exists (safe to ignore if not found)
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = load().context("Failed to load configuration")?;
    cfg.log_summary();

    let mut snap = Snapshot::load(&cfg.snapshot)?;
    if let Some(status) = cfg.status {
        snap.status = status;
    }
    let now = now_ms();

    if cfg.discover {
        for rec in sorted_recent(&snap.discover).into_iter().take(cfg.limit) {
            let who = snap.display_name(&rec.caller, &cfg.address);
            println!(
                "{:>10}  {:<16} {:<20} [{}] {} actions, {} pts",
                relative(rec.end, now),
                rec.project,
                who,
                snap.variant_for(&rec.caller),
                rec.count,
                rec.total_points(),
            );
        }
        return Ok(());
    }

    let feed = snap.feed();
    log::info!("status={} activities={}", feed.status, feed.len());

    // Windowing happens here; the feed itself is never truncated
    for activity in feed.activities.iter().take(cfg.limit) {
        let key = activity.key_hint();
        println!(
            "{:>10}  {:<12} {:<24} [{}] {}",
            relative(activity.timestamp(), now),
            activity.kind(),
            format_address(key, &cfg.address),
            snap.variant_for(key),
            activity.summary(),
        );
    }
    if feed.len() > cfg.limit {
        log::info!("{} more not shown (FEED_LIMIT={})", feed.len() - cfg.limit, cfg.limit);
    }

    Ok(())
}
