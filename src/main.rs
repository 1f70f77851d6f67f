//! FundCore demo runner
//!
//! Seeds a set of accounts, hammers the transfer engine from several worker
//! threads with random transfers, then verifies that the grand total
//! survived and no balance went negative.
//!
//! ```text
//! ┌──────────┐    ┌───────────┐    ┌──────────┐    ┌──────────┐
//! │  Config  │───▶│  Accounts │───▶│  Storm   │───▶│  Verify  │
//! │  (YAML)  │    │  (seeded) │    │ (threads)│    │ (totals) │
//! └──────────┘    └───────────┘    └──────────┘    └──────────┘
//! ```

use std::sync::Arc;
use std::thread;
use std::time::Instant;

use anyhow::{Context, bail};
use rand::Rng;
use rust_decimal::Decimal;
use tracing::info;

use fundcore::config::AppConfig;
use fundcore::logging::init_logging;
use fundcore::{Account, AccountStore, LogNotifier, TransferEngine, TransferError, TransferRequest};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

fn account_id(index: usize) -> String {
    format!("acct-{:04}", index)
}

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load(&get_env());
    let _guard = init_logging(&config);

    let demo = config.demo.clone();
    if demo.accounts < 2 {
        bail!("demo.accounts must be at least 2, got {}", demo.accounts);
    }

    // Seed accounts
    let store = Arc::new(AccountStore::new());
    let initial_balance = Decimal::from(demo.initial_balance);
    for i in 0..demo.accounts {
        store
            .create(Account::new(account_id(i), initial_balance))
            .with_context(|| format!("seeding account {}", account_id(i)))?;
    }
    let expected_total = initial_balance * Decimal::from(demo.accounts as u64);

    info!(
        accounts = demo.accounts,
        workers = demo.workers,
        transfers_per_worker = demo.transfers_per_worker,
        "storm starting"
    );

    // Storm: every worker fires random transfers between random pairs
    let engine = Arc::new(TransferEngine::new(Arc::clone(&store), Arc::new(LogNotifier)));
    let start = Instant::now();

    let mut handles = vec![];
    for worker in 0..demo.workers {
        let engine = Arc::clone(&engine);
        let accounts = demo.accounts;
        let transfers = demo.transfers_per_worker;
        handles.push(thread::spawn(move || -> anyhow::Result<(u64, u64)> {
            let mut rng = rand::thread_rng();
            let mut committed = 0u64;
            let mut rejected = 0u64;

            for _ in 0..transfers {
                let from = rng.gen_range(0..accounts);
                let mut to = rng.gen_range(0..accounts);
                while to == from {
                    to = rng.gen_range(0..accounts);
                }
                let amount = Decimal::from(rng.gen_range(1..=100u64));

                let request = TransferRequest::new(account_id(from), account_id(to), amount);
                match engine.transfer(&request) {
                    Ok(()) => committed += 1,
                    Err(TransferError::InsufficientFunds(_)) => rejected += 1,
                    Err(e) => bail!("worker {}: unexpected transfer failure: {}", worker, e),
                }
            }
            Ok((committed, rejected))
        }));
    }

    let mut committed = 0u64;
    let mut rejected = 0u64;
    for handle in handles {
        let (c, r) = handle
            .join()
            .map_err(|_| anyhow::anyhow!("storm worker panicked"))??;
        committed += c;
        rejected += r;
    }
    let elapsed = start.elapsed();

    // Verify: conservation and non-negativity
    let total = store.total_balance();
    if total != expected_total {
        bail!(
            "conservation violated: expected total {}, found {}",
            expected_total,
            total
        );
    }
    for i in 0..demo.accounts {
        let balance = store
            .get(&account_id(i))
            .map(|a| a.balance())
            .unwrap_or_default();
        if balance < Decimal::ZERO {
            bail!("account {} ended negative: {}", account_id(i), balance);
        }
    }

    let throughput = committed as f64 / elapsed.as_secs_f64();
    info!(
        committed,
        rejected,
        elapsed_ms = elapsed.as_millis() as u64,
        throughput_tps = throughput as u64,
        total = %total,
        "storm finished: totals conserved"
    );

    Ok(())
}
