//! lotto: CLI binary for checking 6/45 lotto tickets.
//!
//! Subcommands:
//! - check
//! - sim

use std::env;
use std::process;

use lotto_core::{
    cost, ticket_count, LottoConfig, LottoNumber, LottoTicket, Prize, PrizeTally, QuickPick,
    TallyMode, WinningTicket, RULESET_ID,
};
use lotto_logging::{
    DrawSummaryEventV1, NdjsonWriter, TicketCheckedEventV1, VersionInfoV1, EVENT_DRAW_SUMMARY,
    EVENT_TICKET_CHECKED,
};

/// Tickets buffered per parallel tally pass in `lotto sim`.
const SIM_CHUNK: usize = 1 << 16;

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    process::exit(1);
}

/// The argument after `flag`. Another `--option` in that slot counts as missing.
fn value_of<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i + 1) {
        Some(v) if !v.starts_with("--") => v.as_str(),
        _ => fail(format_args!("Missing value for {flag}")),
    }
}

fn parse_u64(args: &[String], i: usize, flag: &str) -> u64 {
    let raw = value_of(args, i, flag);
    raw.parse()
        .unwrap_or_else(|_| fail(format_args!("Invalid {flag} value: {raw}")))
}

/// Config from `--config`, or defaults. Also returns the file's content hash.
fn load_config(path: Option<&str>) -> (LottoConfig, Option<String>) {
    let Some(path) = path else {
        return (LottoConfig::default(), None);
    };
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format_args!("Failed to read config file: {e}")));
    let cfg = LottoConfig::from_yaml(&text)
        .unwrap_or_else(|e| fail(format_args!("Failed to load config: {e}")));
    if let Err(e) = cfg.validate() {
        fail(e);
    }
    (cfg, Some(lotto_logging::hash_config_bytes(text.as_bytes())))
}

fn parse_winning(winning: Option<&str>, bonus: Option<&str>) -> Option<WinningTicket> {
    match (winning, bonus) {
        (None, None) => None,
        (Some(_), None) => fail("--winning requires --bonus"),
        (None, Some(_)) => fail("--bonus requires --winning"),
        (Some(w), Some(b)) => {
            let numbers = w
                .parse::<LottoTicket>()
                .unwrap_or_else(|e| fail(format_args!("Invalid --winning: {e}")));
            let bonus = b
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("cannot parse lotto number from {b:?}"))
                .and_then(|v| LottoNumber::of(v).map_err(|e| e.to_string()))
                .unwrap_or_else(|e| fail(format_args!("Invalid --bonus: {e}")));
            Some(WinningTicket::new(numbers, bonus).unwrap_or_else(|e| fail(e)))
        }
    }
}

fn open_log(path: Option<&str>, cfg: &LottoConfig) -> Option<NdjsonWriter> {
    path.map(|p| {
        NdjsonWriter::open_append_with_flush(p, cfg.logging.flush_every_lines)
            .unwrap_or_else(|e| fail(format_args!("Failed to open log {p}: {e}")))
    })
}

fn print_tally(tally: &PrizeTally, mode: TallyMode, spent: u64) {
    println!();
    println!("Results:");
    let counts = tally.to_map(mode);
    // Winning tiers from Fifth up, then the losers.
    for (prize, count) in counts.iter().rev().filter(|(p, _)| p.is_winning()) {
        println!("  - {} ({}): {}", prize, prize.amount(), count);
    }
    if let Some(count) = counts.get(&Prize::Lose) {
        println!("  - {}: {}", Prize::Lose, count);
    }
    println!("  - Total prize: {}", tally.total_prize_money());
    println!("  - Return rate: {:.2}", tally.return_rate(spent));
}

fn summary_event(
    winning: &WinningTicket,
    tally: &PrizeTally,
    mode: TallyMode,
    spent: u64,
    config_hash: Option<String>,
) -> DrawSummaryEventV1 {
    DrawSummaryEventV1 {
        event: EVENT_DRAW_SUMMARY.to_string(),
        ts_ms: lotto_logging::now_ms(),
        v: VersionInfoV1::new(RULESET_ID),
        winning: winning.numbers().values(),
        bonus: winning.bonus().value(),
        tickets: tally.total(),
        counts: tally
            .to_map(mode)
            .into_iter()
            .map(|(p, c)| (p.name().to_string(), c))
            .collect(),
        total_prize: tally.total_prize_money(),
        spent,
        return_rate: tally.return_rate(spent),
        config_hash,
    }
}

fn finish_log(log: Option<NdjsonWriter>, summary: &DrawSummaryEventV1) {
    if let Some(mut w) = log {
        if let Err(e) = w.write_event(summary).and_then(|_| w.flush()) {
            fail(format_args!("Failed to write log: {e}"));
        }
    }
}

fn cmd_check(args: &[String]) {
    let mut winning: Option<String> = None;
    let mut bonus: Option<String> = None;
    let mut tickets: Vec<String> = Vec::new();
    let mut config_path: Option<String> = None;
    let mut include_zero = false;
    let mut log_path: Option<String> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"lotto check

USAGE:
    lotto check --winning 1,2,3,4,5,6 --bonus 7 --ticket 1,2,3,4,5,8 [--ticket ...]

OPTIONS:
    --winning LIST    Six winning numbers, comma separated (required)
    --bonus N         Bonus number, not one of the winning six (required)
    --ticket LIST     Ticket to check; repeat for several (at least one)
    --config PATH     YAML config (default: built-in defaults)
    --include-zero    List prize tiers nobody hit
    --log PATH        Append NDJSON events to PATH
"#
                );
                return;
            }
            "--winning" => {
                winning = Some(value_of(args, i, "--winning").to_string());
                i += 2;
            }
            "--bonus" => {
                bonus = Some(value_of(args, i, "--bonus").to_string());
                i += 2;
            }
            "--ticket" => {
                tickets.push(value_of(args, i, "--ticket").to_string());
                i += 2;
            }
            "--config" => {
                config_path = Some(value_of(args, i, "--config").to_string());
                i += 2;
            }
            "--include-zero" => {
                include_zero = true;
                i += 1;
            }
            "--log" => {
                log_path = Some(value_of(args, i, "--log").to_string());
                i += 2;
            }
            other => {
                eprintln!("Unknown option for `lotto check`: {}", other);
                eprintln!("Run `lotto check --help` for usage.");
                process::exit(1);
            }
        }
    }

    let (cfg, config_hash) = load_config(config_path.as_deref());
    let Some(winning) = parse_winning(winning.as_deref(), bonus.as_deref()) else {
        fail("Missing --winning/--bonus");
    };
    if tickets.is_empty() {
        fail("Missing --ticket");
    }
    let tickets: Vec<LottoTicket> = tickets
        .iter()
        .map(|t| {
            t.parse::<LottoTicket>()
                .unwrap_or_else(|e| fail(format_args!("Invalid --ticket {t}: {e}")))
        })
        .collect();
    let mode = if include_zero {
        TallyMode::IncludeZero
    } else {
        cfg.tally.mode
    };
    let mut log = open_log(log_path.as_deref(), &cfg);

    println!("Winning numbers: {winning}");
    let mut tally = PrizeTally::new();
    for (idx, ticket) in tickets.iter().enumerate() {
        let outcome = winning.outcome(ticket);
        let prize = winning.compare_with(ticket);
        tally.record(prize);
        println!("  {ticket} -> {prize}");

        if let Some(w) = log.as_mut() {
            let event = TicketCheckedEventV1 {
                event: EVENT_TICKET_CHECKED.to_string(),
                ts_ms: lotto_logging::now_ms(),
                v: VersionInfoV1::new(RULESET_ID),
                ticket_idx: idx as u64,
                numbers: ticket.values(),
                match_count: outcome.match_count,
                bonus_matched: outcome.bonus_matched,
                prize: prize.name().to_string(),
            };
            if let Err(e) = w.write_event(&event) {
                fail(format_args!("Failed to write log: {e}"));
            }
        }
    }

    let spent = cost(tickets.len() as u64, cfg.purchase.ticket_price);
    print_tally(&tally, mode, spent);
    finish_log(log, &summary_event(&winning, &tally, mode, spent, config_hash));
}

fn cmd_sim(args: &[String]) {
    let mut budget: Option<u64> = None;
    let mut n_tickets: Option<u64> = None;
    let mut seed: Option<u64> = None;
    let mut winning: Option<String> = None;
    let mut bonus: Option<String> = None;
    let mut config_path: Option<String> = None;
    let mut include_zero = false;
    let mut log_path: Option<String> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"lotto sim

USAGE:
    lotto sim [--budget N | --tickets N] [--seed S] [--winning LIST --bonus N]

OPTIONS:
    --budget N        Money to spend; buys floor(N / ticket_price) tickets (default: 14000)
    --tickets N       Number of quick-pick tickets (overrides --budget)
                      Runs above sim.max_tickets (default: 10000000) are refused
    --seed S          RNG seed (default: sim.seed from config)
    --winning LIST    Fixed winning numbers (default: drawn from the seed)
    --bonus N         Bonus number, required with --winning
    --config PATH     YAML config (default: built-in defaults)
    --include-zero    List prize tiers nobody hit
    --log PATH        Append a draw_summary NDJSON event to PATH
"#
                );
                return;
            }
            "--budget" => {
                budget = Some(parse_u64(args, i, "--budget"));
                i += 2;
            }
            "--tickets" => {
                n_tickets = Some(parse_u64(args, i, "--tickets"));
                i += 2;
            }
            "--seed" => {
                seed = Some(parse_u64(args, i, "--seed"));
                i += 2;
            }
            "--winning" => {
                winning = Some(value_of(args, i, "--winning").to_string());
                i += 2;
            }
            "--bonus" => {
                bonus = Some(value_of(args, i, "--bonus").to_string());
                i += 2;
            }
            "--config" => {
                config_path = Some(value_of(args, i, "--config").to_string());
                i += 2;
            }
            "--include-zero" => {
                include_zero = true;
                i += 1;
            }
            "--log" => {
                log_path = Some(value_of(args, i, "--log").to_string());
                i += 2;
            }
            other => {
                eprintln!("Unknown option for `lotto sim`: {}", other);
                eprintln!("Run `lotto sim --help` for usage.");
                process::exit(1);
            }
        }
    }

    let (cfg, config_hash) = load_config(config_path.as_deref());
    let price = cfg.purchase.ticket_price;
    let count = match n_tickets {
        Some(n) => n,
        None => ticket_count(budget.unwrap_or(14_000), price).unwrap_or_else(|e| fail(e)),
    };
    if count > cfg.sim.max_tickets {
        fail(format_args!(
            "Too many tickets: {count} exceeds sim.max_tickets ({})",
            cfg.sim.max_tickets
        ));
    }
    let count = usize::try_from(count)
        .unwrap_or_else(|_| fail(format_args!("Too many tickets: {count}")));
    let mode = if include_zero {
        TallyMode::IncludeZero
    } else {
        cfg.tally.mode
    };
    let log = open_log(log_path.as_deref(), &cfg);

    let mut qp = QuickPick::from_seed(seed.unwrap_or(cfg.sim.seed));
    let winning = parse_winning(winning.as_deref(), bonus.as_deref())
        .unwrap_or_else(|| qp.draw_winning());
    let spent = cost(count as u64, price);

    println!("Bought {count} tickets (spent {spent})");
    println!("Winning numbers: {winning}");
    let tickets = qp.by_ref().take(count);
    let tally = if cfg.sim.parallel {
        winning.tally_chunked(tickets, SIM_CHUNK)
    } else {
        tickets.map(|t| winning.compare_with(&t)).collect()
    };
    print_tally(&tally, mode, spent);
    finish_log(log, &summary_event(&winning, &tally, mode, spent, config_hash));
}

fn print_help() {
    eprintln!(
        r#"lotto - 6/45 lotto ticket checker

USAGE:
    lotto <COMMAND> [OPTIONS]

COMMANDS:
    check               Check tickets against a winning draw
    sim                 Quick-pick tickets and tally them against a draw

OPTIONS:
    -h, --help          Print this help message
    -V, --version       Print version

Run `lotto <COMMAND> --help` for command options.
"#
    );
}

fn print_version() {
    println!("lotto {}", env!("CARGO_PKG_VERSION"));
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_help();
        process::exit(1);
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => {
            print_help();
        }
        "-V" | "--version" => {
            print_version();
        }
        "check" => {
            cmd_check(&args[2..]);
        }
        "sim" => {
            cmd_sim(&args[2..]);
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            eprintln!("Run `lotto --help` for usage.");
            process::exit(1);
        }
    }
}
