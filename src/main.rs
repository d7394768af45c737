use clap::{Parser, Subcommand};
use erdos_straus_tiers::*;
use num_bigint::BigUint;
use std::fs::File;
use std::io::{BufWriter, Write as IoWrite};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "erdos-straus")]
#[command(about = "Erdős–Straus 4/n = 1/x + 1/y + 1/z 解探索 (tier 分類付き)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 1つの n を解く
    Solve {
        n: BigUint,

        /// 探索 shift の上限
        #[arg(long, default_value_t = DEFAULT_MAX_SHIFT)]
        max_shift: u64,
    },
    /// [start, end] を走査して CSV とサマリーを保存
    Sweep {
        start: BigUint,
        end: BigUint,

        /// 探索 shift の上限
        #[arg(long, default_value_t = DEFAULT_MAX_SHIFT)]
        max_shift: u64,

        /// CSV 出力先（省略時は output/ に自動命名）
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn output_dir() -> PathBuf {
    let dir = PathBuf::from("output");
    std::fs::create_dir_all(&dir).ok();
    dir
}

fn timestamp() -> String {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let s = now % 60;
    let m = (now / 60) % 60;
    let h = (now / 3600) % 24;
    let days = now / 86400;
    let y = 1970 + days / 365;
    let d = days % 365;
    format!("{:04}{:03}_{:02}{:02}{:02}", y, d, h, m, s)
}

fn short_n(n: &BigUint) -> String {
    let s = n.to_string();
    if s.len() <= 16 {
        s
    } else {
        format!("{}..{}d", &s[..6], s.len())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Solve { n, max_shift } => cmd_solve(&n, max_shift),
        Commands::Sweep { start, end, max_shift, output } => {
            let config = SweepConfig::new(start, end).with_max_shift(max_shift);
            if let Err(e) = cmd_sweep(&config, output) {
                eprintln!("走査に失敗しました: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn cmd_solve(n: &BigUint, max_shift: u64) {
    let timer = Instant::now();
    let s = solve(n, max_shift);
    let elapsed = timer.elapsed();
    let class = classify(n);

    println!("n = {}", n);
    println!("max_shift = {}", max_shift);
    println!("n mod 4 = {} {} (帯 {})", class.mod4, class.glyph, class.band);
    println!();
    println!("--- 結果 ---");
    match &s.triple {
        Some(t) => {
            println!("x = {}", t.x());
            println!("y = {}", t.y());
            println!("z = {}", t.z());
            println!("4/{} = 1/{} + 1/{} + 1/{}", n, t.x(), t.y(), t.z());
        }
        None => println!("解なし"),
    }
    println!("tier   = {}", s.tier);
    println!("method = {}", s.method);
    println!("status = {}", s.status);
    if let Err(e) = check_solution(&s) {
        println!("整合性検査: NG ({})", e);
    }
    println!("計算時間 = {:?}", elapsed);
}

fn cmd_sweep(config: &SweepConfig, output: Option<PathBuf>) -> Result<(), SweepError> {
    let csv_path = output.unwrap_or_else(|| {
        output_dir().join(format!(
            "sweep_{}-{}_s{}_{}.csv",
            short_n(&config.first()),
            short_n(&config.end),
            config.max_shift,
            timestamp()
        ))
    });

    println!("範囲走査: [{}, {}], max_shift={}", config.first(), config.end, config.max_shift);
    println!();

    let timer = Instant::now();
    let last_print = std::cell::Cell::new(Instant::now());
    let mut w = BufWriter::new(File::create(&csv_path)?);
    let result = sweep_range(config, &mut w, |done, total| {
        let now = Instant::now();
        if now.duration_since(last_print.get()).as_millis() >= 500 && total > 0 {
            let elapsed = timer.elapsed();
            let pct = done as f64 / total as f64 * 100.0;
            let nps = done as f64 / elapsed.as_secs_f64();
            eprint!(
                "\x1b[2K\r  [{:.1}s] {}/{} ({:.1}%) | {:.0} nums/s",
                elapsed.as_secs_f64(), done, total, pct, nps
            );
            last_print.set(now);
        }
    })?;
    let elapsed = timer.elapsed();
    eprintln!();

    let tc = &result.tier_counts;
    let cs = &result.class_stats;
    println!("--- tier 集計 ---");
    for tier in Tier::ALL {
        println!("{} = {}", tier, tc.get(tier));
    }
    println!("合計 = {}", tc.total());
    println!();
    println!("--- n mod 4 別 ---");
    for m in 0..4 {
        println!(
            "  {} {}: 成功 {} / 失敗 {}",
            m, classify::GLYPHS[m], cs.success[m], cs.failure[m]
        );
    }
    if !result.failures.is_empty() {
        println!("T5 (失敗) = {} 個", result.failures.len());
        for n in &result.failures[..result.failures.len().min(10)] {
            println!("  {}", n);
        }
    }
    if !result.inconsistent.is_empty() {
        println!("整合性検査 NG = {} 個", result.inconsistent.len());
    }
    println!("計算時間 = {:?}", elapsed);
    println!("\nCSV保存: {}", csv_path.display());

    let stem = csv_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sweep".to_string());
    let summary_path = csv_path.with_file_name(format!("{}_summary.txt", stem));
    let mut f = File::create(&summary_path)?;
    writeln!(f, "# erdos-straus sweep")?;
    writeln!(f, "range = [{}, {}]", config.first(), config.end)?;
    writeln!(f, "max_shift = {}", config.max_shift)?;
    writeln!(f, "total_checked = {}", result.total_checked)?;
    writeln!(f)?;
    writeln!(f, "# Tier counts")?;
    for tier in Tier::ALL {
        writeln!(f, "{} = {}", tier, tc.get(tier))?;
    }
    writeln!(f)?;
    writeln!(f, "# Residue classes (n mod 4: success / failure)")?;
    for m in 0..4 {
        writeln!(f, "{} {}: {} / {}", m, classify::GLYPHS[m], cs.success[m], cs.failure[m])?;
    }
    writeln!(f)?;
    writeln!(f, "inconsistent = {}", result.inconsistent.len())?;
    for (n, e) in &result.inconsistent {
        writeln!(f, "  {}: {}", n, e)?;
    }
    writeln!(f, "elapsed = {:?}", elapsed)?;
    if !result.failures.is_empty() {
        writeln!(f, "\n# T5:")?;
        for n in &result.failures {
            writeln!(f, "{}", n)?;
        }
    }
    println!("サマリー保存: {}", summary_path.display());
    Ok(())
}
