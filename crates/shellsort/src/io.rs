//! Raw `i64` file format: native byte order, 8 bytes per value, no header.
//!
//! A trailing partial value is ignored on load.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::chain::Chain;
use crate::error::{Error, Result};

const WIDTH: usize = size_of::<i64>();

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes.len() % WIDTH != 0 {
        tracing::warn!(
            path = %path.display(),
            trailing = bytes.len() % WIDTH,
            "ignoring trailing bytes"
        );
    }
    Ok(bytes)
}

fn decode(bytes: &[u8]) -> impl Iterator<Item = i64> + '_ {
    bytes.chunks_exact(WIDTH).map(|chunk| {
        let mut raw = [0u8; WIDTH];
        raw.copy_from_slice(chunk);
        i64::from_ne_bytes(raw)
    })
}

/// Loads every value of `path` into a vector.
pub fn load_buffer(path: impl AsRef<Path>) -> Result<Vec<i64>> {
    let path = path.as_ref();
    let bytes = read_bytes(path)?;
    let values: Vec<i64> = decode(&bytes).collect();
    tracing::debug!(path = %path.display(), count = values.len(), "loaded buffer");
    Ok(values)
}

/// Loads every value of `path` into a chain, in file order.
pub fn load_chain(path: impl AsRef<Path>) -> Result<Chain> {
    let path = path.as_ref();
    let bytes = read_bytes(path)?;
    let chain: Chain = decode(&bytes).collect();
    tracing::debug!(path = %path.display(), count = chain.len(), "loaded chain");
    Ok(chain)
}

fn write_values<I>(path: &Path, values: I) -> Result<usize>
where
    I: IntoIterator<Item = i64>,
{
    let file = File::create(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let to_write_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(file);
    let mut count = 0usize;
    for value in values {
        writer
            .write_all(&value.to_ne_bytes())
            .map_err(to_write_error)?;
        count += 1;
    }
    writer.flush().map_err(to_write_error)?;

    tracing::debug!(path = %path.display(), count, "saved values");
    Ok(count)
}

/// Writes `values` to `path` and returns how many were written.
pub fn save_buffer(path: impl AsRef<Path>, values: &[i64]) -> Result<usize> {
    write_values(path.as_ref(), values.iter().copied())
}

/// Writes the chain to `path` in link order and returns how many values were written.
pub fn save_chain(path: impl AsRef<Path>, chain: &Chain) -> Result<usize> {
    write_values(path.as_ref(), chain.iter())
}
