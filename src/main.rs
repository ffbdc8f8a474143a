//! Koroma - 한국어/일본어 로마자 변환 CLI

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use koroma::config::{load_config, load_config_from, save_config, save_config_to, KoromaConfig};
use koroma::{ConfigError, KanaConverter, ReadingDictionary, Romanizer};

#[derive(Parser, Debug)]
#[command(name = "koroma", version, about = "Romanize Korean Hangul and Japanese kana text")]
struct Cli {
    /// 설정 파일 경로 (기본: ~/.config/koroma/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// 한자 읽기 사전 경로 (설정 파일 값보다 우선, 내장 사전 위에 병합)
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// 현재 설정(--dictionary 반영)을 설정 파일에 저장하고 종료
    #[arg(long)]
    save_config: bool,

    /// 변환할 텍스트 (없으면 표준 입력을 줄 단위로 읽음)
    text: Vec<String>,
}

fn build_romanizer(
    cli: &Cli,
    config: &KoromaConfig,
) -> Result<Romanizer<KanaConverter>, Box<dyn std::error::Error>> {
    let mut dictionary = ReadingDictionary::bundled();
    if let Some(path) = cli.dictionary.as_ref().or(config.reading_dictionary.as_ref()) {
        dictionary.merge(ReadingDictionary::load(path)?);
    }
    let romanizer = Romanizer::new(KanaConverter::with_dictionary(dictionary));
    log::debug!(
        "읽기 사전 준비 완료 ({}개 항목)",
        romanizer.converter().dictionary().len()
    );
    Ok(romanizer)
}

fn run(cli: &Cli, romanizer: &Romanizer<KanaConverter>) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.text.is_empty() {
        for text in &cli.text {
            writeln!(out, "{}", romanizer.romanize(text)?)?;
        }
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        writeln!(out, "{}", romanizer.romanize(&line)?)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // 설정 로드 (명시한 경로는 실패 시 에러, 기본 경로는 실패 시 기본값)
    let mut config = match &cli.config {
        Some(path) => match load_config_from(path) {
            Ok(config) => config,
            // 저장 모드에서는 아직 없는 파일을 새로 만듦
            Err(ConfigError::Io(_)) if cli.save_config => KoromaConfig::default(),
            Err(e) => {
                eprintln!("설정 파일 로드 실패 ({}): {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => load_config(),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    if cli.save_config {
        if let Some(path) = &cli.dictionary {
            config.reading_dictionary = Some(path.clone());
        }
        let saved = match &cli.config {
            Some(path) => save_config_to(&config, path),
            None => save_config(&config),
        };
        if let Err(e) = saved {
            eprintln!("설정 파일 저장 실패: {}", e);
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    let romanizer = match build_romanizer(&cli, &config) {
        Ok(romanizer) => romanizer,
        Err(e) => {
            log::error!("읽기 사전 로드 실패: {}", e);
            eprintln!("읽기 사전 로드 실패: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run(&cli, &romanizer) {
        eprintln!("변환 실패: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
