//! Run-length decompression for sprite frame rasters
//!
//! Frames are stored under one of two byte-oriented RLE schemes. Both are
//! driven by a signed control byte and terminate when the input runs out at
//! a control byte boundary; running out mid-run is a corruption error.

use std::io::{self, BufReader, Read};

use crate::error::{Error, Result};

/// Reads the next control byte, treating EOF at this position as the normal
/// end of the stream.
fn next_control<R: Read>(reader: &mut R) -> Result<Option<i8>> {
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0] as i8)),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
}

fn read_run<R: Read>(reader: &mut R, len: usize, output: &mut Vec<u8>) -> Result<()> {
    let start = output.len();
    output.resize(start + len, 0);
    reader
        .read_exact(&mut output[start..])
        .map_err(|source| Error::TruncatedRun { source })
}

fn read_fill_byte<R: Read>(reader: &mut R) -> Result<u8> {
    let mut byte = [0u8; 1];
    reader
        .read_exact(&mut byte)
        .map_err(|source| Error::TruncatedRun { source })?;
    Ok(byte[0])
}

/// Decompresses a PackBits-style stream.
///
/// A non-negative control byte `n` is followed by `n + 1` literal bytes. A
/// control byte in `-127..=-1` is followed by a single fill byte that is
/// repeated `1 - n` times. `-128` is a no-op.
pub fn unpack_bits<R: Read>(reader: R) -> Result<Vec<u8>> {
    let mut reader = BufReader::new(reader);
    let mut output = Vec::new();

    while let Some(control) = next_control(&mut reader)? {
        if control >= 0 {
            read_run(&mut reader, control as usize + 1, &mut output)?;
        } else if control != -128 {
            let fill = read_fill_byte(&mut reader)?;
            let count = 1 + control.unsigned_abs() as usize;
            output.resize(output.len() + count, fill);
        }
    }

    Ok(output)
}

/// Decompresses a zero-run stream.
///
/// A non-negative control byte `n` is followed by `n + 1` literal bytes. Any
/// negative control byte `n` (`-128` included) expands to `-n` zero bytes
/// with no operand.
pub fn unpack_zero_runs<R: Read>(reader: R) -> Result<Vec<u8>> {
    let mut reader = BufReader::new(reader);
    let mut output = Vec::new();

    while let Some(control) = next_control(&mut reader)? {
        if control >= 0 {
            read_run(&mut reader, control as usize + 1, &mut output)?;
        } else {
            output.resize(output.len() + control.unsigned_abs() as usize, 0);
        }
    }

    Ok(output)
}
