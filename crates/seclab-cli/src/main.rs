//! Command-line interface for the RC5, MD5 and Lehmer primitives.

#![forbid(unsafe_code)]

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use lehmer_gen::{LehmerGenerator, LehmerParams};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rc5_core::{derive_key, CipherConfig, Rc5Cipher, WordSize};
use serde::Deserialize;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// RC5 / MD5 / Lehmer toolkit.
#[derive(Parser)]
#[command(
    name = "seclab",
    version,
    author,
    about = "RC5 (CBC), MD5 and Lehmer generator toolkit"
)]
struct Cli {
    /// TOML profile supplying `[rc5]` and `[lehmer]` defaults.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Raise log verbosity (-v debug, -vv trace). Overrides RUST_LOG.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Lehmer sequence and report its period.
    Lehmer {
        #[command(flatten)]
        params: LehmerArgs,
        /// Write values one per line to FILE instead of stdout.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print the MD5 digest of text, a file, or stdin.
    Md5 {
        /// Hash this UTF-8 text.
        #[arg(long, conflicts_with = "input")]
        text: Option<String>,
        /// Hash this file (stdin when neither option is given).
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Check that two files have the same MD5 digest.
    Md5Verify {
        /// Original file.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// File to compare against the original.
        #[arg(long, value_name = "FILE")]
        against: PathBuf,
    },
    /// Encrypt a file (or stdin) with RC5 in CBC mode.
    Encrypt(Rc5Io),
    /// Decrypt a file (or stdin) produced by `encrypt`.
    Decrypt(Rc5Io),
    /// Derive a key from a passphrase and print it as hex.
    DeriveKey {
        /// Passphrase to hash.
        #[arg(long)]
        passphrase: String,
        /// Key length in bytes (defaults to the profile's RC5 key length).
        #[arg(long)]
        key_len: Option<usize>,
    },
    /// Round-trip random data under every word size.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args)]
struct LehmerArgs {
    /// Multiplier A.
    #[arg(long)]
    multiplier: Option<u64>,
    /// Increment C.
    #[arg(long)]
    increment: Option<u64>,
    /// Modulus M (non-zero).
    #[arg(long)]
    modulus: Option<u64>,
    /// Seed X0.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of values to generate.
    #[arg(long)]
    count: Option<usize>,
}

impl LehmerArgs {
    fn resolve(&self, base: LehmerParams) -> LehmerParams {
        LehmerParams {
            a: self.multiplier.unwrap_or(base.a),
            c: self.increment.unwrap_or(base.c),
            m: self.modulus.unwrap_or(base.m),
            x0: self.seed.unwrap_or(base.x0),
            count: self.count.unwrap_or(base.count),
        }
    }
}

#[derive(Args)]
struct CipherArgs {
    /// Word size in bits: 16, 32 or 64.
    #[arg(long, value_name = "BITS")]
    word_size: Option<u32>,
    /// Number of rounds.
    #[arg(long)]
    rounds: Option<u32>,
    /// Key length in bytes (passphrase derivation and IV sizing).
    #[arg(long)]
    key_len: Option<usize>,
}

impl CipherArgs {
    fn resolve(&self, base: CipherConfig) -> Result<CipherConfig> {
        let word_size = match self.word_size {
            Some(bits) => WordSize::try_from(bits)?,
            None => base.word_size,
        };
        let config = CipherConfig {
            word_size,
            rounds: self.rounds.unwrap_or(base.rounds),
            key_len: self.key_len.unwrap_or(base.key_len),
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct KeyArgs {
    /// Raw key as hex.
    #[arg(long, value_name = "HEX")]
    key_hex: Option<String>,
    /// Passphrase hashed into a key of `--key-len` bytes.
    #[arg(long)]
    passphrase: Option<String>,
}

impl KeyArgs {
    fn resolve(&self, key_len: usize) -> Result<Vec<u8>> {
        match (&self.key_hex, &self.passphrase) {
            (Some(key_hex), _) => {
                let key = hex::decode(key_hex.trim()).context("decode key hex")?;
                if key.len() != key_len {
                    warn!(
                        key_bytes = key.len(),
                        key_len, "key length differs from the configured key length"
                    );
                }
                Ok(key)
            }
            (None, Some(passphrase)) => Ok(derive_key(passphrase.as_bytes(), key_len)),
            (None, None) => bail!("either --key-hex or --passphrase is required"),
        }
    }
}

#[derive(Args)]
struct Rc5Io {
    #[command(flatten)]
    cipher: CipherArgs,
    #[command(flatten)]
    key: KeyArgs,
    /// Input file (stdin when omitted).
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,
    /// Output file (stdout when omitted).
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
}

/// Defaults loaded from `--config`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Profile {
    rc5: CipherConfig,
    lehmer: LehmerParams,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let profile = load_profile(cli.config.as_deref())?;

    match cli.command {
        Commands::Lehmer { params, output } => {
            cmd_lehmer(params.resolve(profile.lehmer), output.as_deref())
        }
        Commands::Md5 { text, input } => cmd_md5(text, input.as_deref()),
        Commands::Md5Verify { input, against } => cmd_md5_verify(&input, &against),
        Commands::Encrypt(io) => cmd_rc5(&io, profile.rc5, Direction::Encrypt),
        Commands::Decrypt(io) => cmd_rc5(&io, profile.rc5, Direction::Decrypt),
        Commands::DeriveKey {
            passphrase,
            key_len,
        } => {
            let key = derive_key(passphrase.as_bytes(), key_len.unwrap_or(profile.rc5.key_len));
            println!("{}", hex::encode(key));
            Ok(())
        }
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_profile(path: Option<&Path>) -> Result<Profile> {
    let Some(path) = path else {
        return Ok(Profile::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let profile = parse_profile(&text).with_context(|| format!("parse {}", path.display()))?;
    debug!(path = %path.display(), ?profile, "loaded profile");
    Ok(profile)
}

fn parse_profile(text: &str) -> Result<Profile> {
    Ok(toml::from_str(text)?)
}

fn cmd_lehmer(params: LehmerParams, output: Option<&Path>) -> Result<()> {
    let generator = LehmerGenerator::new(params).context("invalid Lehmer parameters")?;
    let mut last_reported = 0u8;
    let sequence = generator.generate_with_progress(|percent| {
        if percent >= last_reported.saturating_add(10) || percent == 100 {
            debug!(percent, "Lehmer generation progress");
            last_reported = percent;
        }
    });

    match output {
        Some(path) => {
            let file = fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
            sequence
                .write_lines(BufWriter::new(file))
                .with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), count = sequence.len(), "wrote sequence");
        }
        None => sequence
            .write_lines(io::stdout().lock())
            .context("write sequence")?,
    }

    match sequence.repetition() {
        Some(period) => eprintln!(
            "period: {} (first occurrence at index {})",
            period.length, period.detected_at
        ),
        None => eprintln!("no period found within {} values", sequence.len()),
    }
    Ok(())
}

fn cmd_md5(text: Option<String>, input: Option<&Path>) -> Result<()> {
    let data = match text {
        Some(text) => text.into_bytes(),
        None => read_input(input)?,
    };
    println!("{}", md5_core::digest(&data));
    Ok(())
}

fn cmd_md5_verify(input: &Path, against: &Path) -> Result<()> {
    let original = fs::read(input).with_context(|| format!("read {}", input.display()))?;
    let candidate = fs::read(against).with_context(|| format!("read {}", against.display()))?;
    let expected = md5_core::digest(&original);
    let actual = md5_core::digest(&candidate);
    if expected != actual {
        bail!("integrity check failed: {expected} != {actual}");
    }
    println!("integrity check passed: {expected}");
    Ok(())
}

#[derive(Clone, Copy, Debug)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn cmd_rc5(io: &Rc5Io, base: CipherConfig, direction: Direction) -> Result<()> {
    let config = io.cipher.resolve(base)?;
    let key = io.key.resolve(config.key_len)?;
    let cipher = Rc5Cipher::new(config)?;
    let data = read_input(io.input.as_deref())?;

    let result = match direction {
        Direction::Encrypt => cipher.encode(&data, &key),
        Direction::Decrypt => cipher.decode(&data, &key).context("decrypt")?,
    };
    info!(%config, ?direction, input = data.len(), output = result.len(), "RC5 done");
    write_output(io.output.as_deref(), &result)
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    for word_size in WordSize::ALL {
        let config = CipherConfig {
            word_size,
            ..CipherConfig::default()
        };
        let cipher = Rc5Cipher::new(config)?;

        let mut key = vec![0u8; config.key_len];
        rng.fill_bytes(&mut key);
        let mut plaintext = vec![0u8; rng.gen_range(0..48)];
        rng.fill_bytes(&mut plaintext);

        let ciphertext = cipher.encode(&plaintext, &key);
        let decrypted = cipher.decode(&ciphertext, &key)?;

        println!("{config}");
        println!("  key:        {}", hex::encode(&key));
        println!("  plaintext:  {}", hex::encode(&plaintext));
        println!("  ciphertext: {}", hex::encode(&ciphertext));
        println!("  md5(pt):    {}", md5_core::digest(&plaintext));
        if decrypted != plaintext {
            bail!("demo roundtrip failed for {config}");
        }
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path).with_context(|| format!("read {}", path.display())),
        None => {
            let mut data = Vec::new();
            io::stdin()
                .read_to_end(&mut data)
                .context("read stdin")?;
            Ok(data)
        }
    }
}

fn write_output(path: Option<&Path>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => fs::write(path, data).with_context(|| format!("write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data).context("write stdout")?;
            stdout.flush().context("flush stdout")
        }
    }
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn profile_fills_missing_tables_with_defaults() {
        let profile = parse_profile("[rc5]\nword_size = 64\nrounds = 16\n").unwrap();
        assert_eq!(profile.rc5.word_size, WordSize::W64);
        assert_eq!(profile.rc5.rounds, 16);
        assert_eq!(profile.rc5.key_len, 16);
        assert_eq!(profile.lehmer, LehmerParams::default());
    }

    #[test]
    fn profile_rejects_unknown_sections() {
        assert!(parse_profile("[rsa]\nbits = 2048\n").is_err());
    }

    #[test]
    fn flags_override_profile() {
        let args = CipherArgs {
            word_size: Some(16),
            rounds: None,
            key_len: Some(8),
        };
        let config = args.resolve(CipherConfig::default()).unwrap();
        assert_eq!(config.word_size, WordSize::W16);
        assert_eq!(config.rounds, 12);
        assert_eq!(config.key_len, 8);

        let bad = CipherArgs {
            word_size: Some(12),
            rounds: None,
            key_len: None,
        };
        assert!(bad.resolve(CipherConfig::default()).is_err());
    }

    #[test]
    fn passphrase_and_hex_keys_resolve() {
        let from_passphrase = KeyArgs {
            key_hex: None,
            passphrase: Some("abcd".into()),
        };
        assert_eq!(
            from_passphrase.resolve(16).unwrap(),
            derive_key(b"abcd", 16)
        );

        let from_hex = KeyArgs {
            key_hex: Some("00ff10".into()),
            passphrase: None,
        };
        assert_eq!(from_hex.resolve(16).unwrap(), vec![0x00, 0xff, 0x10]);
    }

    #[test]
    fn lehmer_flags_override_profile() {
        let args = LehmerArgs {
            multiplier: Some(5),
            increment: Some(1),
            modulus: Some(16),
            seed: Some(3),
            count: None,
        };
        let params = args.resolve(LehmerParams::default());
        assert_eq!(params.a, 5);
        assert_eq!(params.m, 16);
        assert_eq!(params.count, 16);
    }
}
