// crates/kaofix-core/src/selftest.rs
//
// Round-trip check: encode each sample, decode it back, compare.
// A failing sample is recorded and the run moves on.

use tracing::debug;

use crate::codec::TextEncoding;

pub const SAMPLES: [&str; 7] = [
    "(ﾟ∀ﾟ)",
    "(*´∀`*)",
    "(´▽`ʃ♡ƪ)",
    "ヾ(●゜▽゜●)♡",
    "｡:.ﾟヽ(*´∀`)ﾉﾟ.:｡",
    "∑(ι´Дン)ノ",
    "◢▆▅▄▃崩╰(〒皿〒)╯潰▃▄▅▇◣",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SampleStatus {
    Ok,
    Mismatch { decoded: String },
    Error(String),
}

#[derive(Clone, Debug)]
pub struct SampleOutcome {
    pub sample: String,
    pub status: SampleStatus,
}

impl SampleOutcome {
    pub fn passed(&self) -> bool {
        self.status == SampleStatus::Ok
    }
}

#[derive(Clone, Debug)]
pub struct SelfTestReport {
    pub encoding: TextEncoding,
    pub outcomes: Vec<SampleOutcome>,
}

impl SelfTestReport {
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(SampleOutcome::passed)
    }

    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.passed()).count()
    }
}

pub fn run_self_test(encoding: TextEncoding) -> SelfTestReport {
    run_samples(encoding, SAMPLES.iter().copied())
}

pub fn run_samples<'a, I>(encoding: TextEncoding, samples: I) -> SelfTestReport
where
    I: IntoIterator<Item = &'a str>,
{
    let outcomes = samples
        .into_iter()
        .map(|s| {
            let bytes = encoding.encode(s);
            debug!(sample = s, encoding = %encoding, bytes = bytes.len(), "round-trip");
            let status = match encoding.decode(&bytes) {
                Ok(d) if d == s => SampleStatus::Ok,
                Ok(d) => SampleStatus::Mismatch { decoded: d },
                Err(e) => SampleStatus::Error(e.to_string()),
            };
            SampleOutcome {
                sample: s.to_string(),
                status,
            }
        })
        .collect();

    SelfTestReport { encoding, outcomes }
}
