use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::chain::{self, Chain};
use crate::error::{Error, Result};
use crate::{buffer, io};

pub const USAGE: &str = "usage: shellsort <-a|-l> <input> <output>";

/// Storage representation the values are sorted in.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Mode {
    Buffer,
    Chain,
}

pub const ALL_MODES: [Mode; 2] = [Mode::Buffer, Mode::Chain];

impl Mode {
    pub fn flag(self) -> &'static str {
        match self {
            Mode::Buffer => "-a",
            Mode::Chain => "-l",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Buffer => "buffer",
            Mode::Chain => "chain",
        }
    }

    pub fn from_flag(flag: &str) -> Option<Self> {
        ALL_MODES.into_iter().find(|mode| mode.flag() == flag)
    }
}

/// A parsed command line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Invocation {
    pub mode: Mode,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Invocation {
    /// Parses the arguments that follow the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let [flag, input, output] = <[OsString; 3]>::try_from(args).map_err(|args| {
            Error::InvalidArguments(format!("expected 3 arguments, got {}", args.len()))
        })?;
        let mode = flag
            .to_str()
            .and_then(Mode::from_flag)
            .ok_or_else(|| Error::InvalidArguments(format!("unknown mode flag {flag:?}")))?;
        Ok(Self {
            mode,
            input: PathBuf::from(input),
            output: PathBuf::from(output),
        })
    }
}

#[derive(Debug)]
enum Sorted {
    Buffer(Vec<i64>),
    Chain(Chain),
}

/// Outcome of sorting one input file, not yet written out.
#[derive(Debug)]
pub struct Report {
    pub comparisons: u64,
    sorted: Sorted,
}

impl Report {
    pub fn len(&self) -> usize {
        match &self.sorted {
            Sorted::Buffer(values) => values.len(),
            Sorted::Chain(chain) => chain.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn values(&self) -> Vec<i64> {
        match &self.sorted {
            Sorted::Buffer(values) => values.clone(),
            Sorted::Chain(chain) => chain.to_vec(),
        }
    }

    /// Writes the sorted values to `path`, returning how many were written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<usize> {
        match &self.sorted {
            Sorted::Buffer(values) => io::save_buffer(path, values),
            Sorted::Chain(chain) => io::save_chain(path, chain),
        }
    }
}

/// Loads `input` in the given representation and sorts it.
pub fn sort_file(mode: Mode, input: impl AsRef<Path>) -> Result<Report> {
    let input = input.as_ref();
    let report = match mode {
        Mode::Buffer => {
            let mut values = io::load_buffer(input)?;
            let comparisons = buffer::shell_sort(&mut values);
            Report {
                comparisons,
                sorted: Sorted::Buffer(values),
            }
        }
        Mode::Chain => {
            let (sorted, comparisons) = chain::shell_sort(io::load_chain(input)?);
            Report {
                comparisons,
                sorted: Sorted::Chain(sorted),
            }
        }
    };
    tracing::info!(
        mode = mode.name(),
        input = %input.display(),
        len = report.len(),
        comparisons = report.comparisons,
        "sorted"
    );
    Ok(report)
}

/// Sorts `input` into `output` and returns the comparison count.
///
/// `on_sorted` receives the count after sorting and before saving, so the
/// count is reported even when the save fails.
pub fn run<F>(invocation: &Invocation, on_sorted: F) -> Result<u64>
where
    F: FnOnce(u64),
{
    let report = sort_file(invocation.mode, &invocation.input)?;
    on_sorted(report.comparisons);
    report.save(&invocation.output)?;
    Ok(report.comparisons)
}
