use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::Context;
    use clap::{Parser, Subcommand, ValueEnum};
    use fastmix::{
        hash::{self, Digest128},
        log::{info, warn},
        prng::Xoroshiro128Plus,
    };
    use fastmix_profiling::benchmark::{
        Benchmarker,
        throughput::{Throughput, measure_throughput},
    };
    use rand::RngCore;
    use std::{num::ParseIntError, path::PathBuf};

    /// Largest buffer the `speed` command hashes.
    const MAX_SPEED_INPUT_LEN: usize = 4096;

    /// Number of timed calls per hash variant in the `speed` command.
    const SPEED_CALLS: u64 = 4000;

    #[derive(Debug, Parser)]
    #[command(about = "Fast non-cryptographic hashing and random numbers", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Hash a string or the contents of a file with MurmurHash3
        Hash {
            /// Hash variant to compute
            #[arg(short, long, value_enum, default_value_t = VariantArg::All)]
            variant: VariantArg,

            /// Hash seed, decimal or hexadecimal with a `0x` prefix
            #[arg(short, long, default_value = "0", value_parser = parse_u32)]
            seed: u32,

            /// Text whose UTF-8 bytes should be hashed
            #[arg(short, long, conflicts_with = "file", required_unless_present = "file")]
            text: Option<String>,

            /// Path to a file whose contents should be hashed
            #[arg(short, long)]
            file: Option<PathBuf>,
        },
        /// Print values from a xoroshiro128+ generator
        Random {
            /// Generator seed, decimal or hexadecimal with a `0x` prefix (zero
            /// seeds from operating system entropy)
            #[arg(short, long, default_value = "0", value_parser = parse_u64)]
            seed: u64,

            /// Number of values to print
            #[arg(short, long, default_value_t = 10)]
            count: usize,

            /// Print floating-point values in [0, 1) instead of integers
            #[arg(long)]
            float: bool,
        },
        /// Measure hashing throughput for buffers of the given sizes in bytes
        Speed {
            /// Buffer sizes (at most 4096 bytes)
            #[arg(default_values_t = [128])]
            sizes: Vec<usize>,
        },
        #[cfg(feature = "benchmark")]
        /// Run a benchmarking target
        Benchmark {
            /// Benchmarking target to run
            #[arg(short, long, value_enum)]
            target: fastmix::benchmark::Target,

            /// Number of seconds to run the target for (it will always be run at least
            /// once)
            #[arg(short, long, default_value_t = 0.0)]
            duration: f64,

            /// Minimum number of seconds from the program is started until the target
            /// is run
            #[arg(long, default_value_t = 0.0)]
            delay: f64,
        },
        #[cfg(not(feature = "benchmark"))]
        /// Run a benchmarking target (requires the `benchmark` feature)
        Benchmark,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
    enum VariantArg {
        /// 32-bit hash
        #[value(name = "x86-32")]
        X86Hash32,
        /// 128-bit hash with 32-bit lanes, in the duplicated-lane form
        #[value(name = "x86-128")]
        X86Hash128,
        /// 128-bit hash with 32-bit lanes, in the standard form
        #[value(name = "x86-128-canonical")]
        X86Hash128Canonical,
        /// 128-bit hash with 64-bit lanes
        #[value(name = "x64-128")]
        X64Hash128,
        /// All of the above
        All,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Variant {
        X86Hash32,
        X86Hash128,
        X86Hash128Canonical,
        X64Hash128,
    }

    impl VariantArg {
        fn variants(self) -> Vec<Variant> {
            match self {
                Self::X86Hash32 => vec![Variant::X86Hash32],
                Self::X86Hash128 => vec![Variant::X86Hash128],
                Self::X86Hash128Canonical => vec![Variant::X86Hash128Canonical],
                Self::X64Hash128 => vec![Variant::X64Hash128],
                Self::All => Variant::ALL.to_vec(),
            }
        }
    }

    impl Variant {
        const ALL: [Self; 4] = [
            Self::X86Hash32,
            Self::X86Hash128,
            Self::X86Hash128Canonical,
            Self::X64Hash128,
        ];

        fn name(self) -> &'static str {
            match self {
                Self::X86Hash32 => "x86-32",
                Self::X86Hash128 => "x86-128",
                Self::X86Hash128Canonical => "x86-128-canonical",
                Self::X64Hash128 => "x64-128",
            }
        }

        fn hash_to_hex(self, bytes: &[u8], seed: u32) -> String {
            let hash_128: fn(&[u8], u32) -> Digest128 = match self {
                Self::X86Hash32 => return hash::murmur3_32(bytes, seed).to_string(),
                Self::X86Hash128 => hash::murmur3_128_x86,
                Self::X86Hash128Canonical => hash::murmur3_128_x86_canonical,
                Self::X64Hash128 => hash::murmur3_128_x64,
            };
            hash_128(bytes, seed).to_string()
        }

        fn measure(self, input: &[u8]) -> Throughput {
            measure_throughput(input.len(), SPEED_CALLS, |benchmarker| match self {
                Self::X86Hash32 => benchmarker.benchmark(&mut || hash::murmur3_32(input, 0)),
                Self::X86Hash128 => benchmarker.benchmark(&mut || hash::murmur3_128_x86(input, 0)),
                Self::X86Hash128Canonical => {
                    benchmarker.benchmark(&mut || hash::murmur3_128_x86_canonical(input, 0));
                }
                Self::X64Hash128 => benchmarker.benchmark(&mut || hash::murmur3_128_x64(input, 0)),
            })
        }
    }

    fn parse_u32(arg: &str) -> Result<u32, ParseIntError> {
        match arg.strip_prefix("0x") {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => arg.parse(),
        }
    }

    fn parse_u64(arg: &str) -> Result<u64, ParseIntError> {
        match arg.strip_prefix("0x") {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => arg.parse(),
        }
    }

    fn hash_input(
        variant: VariantArg,
        seed: u32,
        text: Option<String>,
        file: Option<PathBuf>,
    ) -> Result<()> {
        let bytes = match (text, file) {
            (Some(text), _) => text.into_bytes(),
            (None, Some(file_path)) => std::fs::read(&file_path)
                .with_context(|| format!("Failed to read {}", file_path.display()))?,
            (None, None) => anyhow::bail!("Either `--text` or `--file` must be given"),
        };

        for variant in variant.variants() {
            println!("{:>17}: {}", variant.name(), variant.hash_to_hex(&bytes, seed));
        }
        Ok(())
    }

    fn print_random(seed: u64, count: usize, float: bool) {
        let mut generator = Xoroshiro128Plus::new(seed);
        for _ in 0..count {
            if float {
                println!("{}", generator.next_f64());
            } else {
                println!("{:016x}", generator.next_u64());
            }
        }
    }

    fn report_speed(sizes: &[usize]) {
        let mut input = vec![0; MAX_SPEED_INPUT_LEN];
        Xoroshiro128Plus::new(0).fill_bytes(&mut input);

        for &size in sizes {
            let size = if size > MAX_SPEED_INPUT_LEN {
                warn!("Capping buffer size {size} to {MAX_SPEED_INPUT_LEN} bytes");
                MAX_SPEED_INPUT_LEN
            } else {
                size
            };
            let input = &input[..size];

            info!("Measuring hash throughput for {size} byte buffers");
            let mut results: Vec<_> = Variant::ALL
                .into_iter()
                .map(|variant| (variant, variant.measure(input)))
                .collect();
            results.sort_by(|(_, a), (_, b)| {
                a.megabytes_per_second()
                    .total_cmp(&b.megabytes_per_second())
            });

            for (variant, throughput) in results {
                println!("{:>17}: {throughput}", variant.name());
            }
            println!();
        }
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        match cli.command {
            Command::Hash {
                variant,
                seed,
                text,
                file,
            } => hash_input(variant, seed, text, file),
            Command::Random { seed, count, float } => {
                print_random(seed, count, float);
                Ok(())
            }
            Command::Speed { sizes } => {
                report_speed(&sizes);
                Ok(())
            }
            #[cfg(feature = "benchmark")]
            Command::Benchmark {
                target,
                duration,
                delay,
            } => {
                fastmix::benchmark::benchmark(target, duration, delay);
                Ok(())
            }
            #[cfg(not(feature = "benchmark"))]
            Command::Benchmark => {
                anyhow::bail!(
                    "The `benchmark` subcommand requires the `benchmark` feature to be enabled."
                )
            }
        }
    }

}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
