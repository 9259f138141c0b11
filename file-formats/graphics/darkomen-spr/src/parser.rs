//! Sprite atlas decoding

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use darkomen_data::ReadExt;

use crate::error::{Error, Result};
use crate::rle;
use crate::types::{
    Color, Compression, FRAME_HEADER_SIZE, Frame, FrameType, HEADER_SIZE, Header, Sprite,
    validate_magic,
};

/// Frame header table entry, resolved but not yet decoded
struct FrameHeader {
    frame_type: FrameType,
    compression: Compression,
    color_count: u16,
    x: u16,
    y: u16,
    width: u16,
    height: u16,
    data_offset: u32,
    compressed_size: u16,
    color_table_offset: u16,
}

fn u16_at(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}

impl Sprite {
    /// Parses a sprite atlas from a seekable byte source.
    ///
    /// The header is validated first. A frame count of zero short-circuits
    /// before any table or pixel data is touched.
    pub fn parse<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        let raw: [u8; HEADER_SIZE] = reader.read_array()?;
        validate_magic([raw[0], raw[1], raw[2], raw[3]])?;

        // The u16 header fields each occupy a 4-byte slot on disk.
        let header = Header {
            file_size: u16_at(&raw, 4),
            frame_header_offset: u16_at(&raw, 8),
            frame_data_offset: u16_at(&raw, 12),
            color_table_offset: u16_at(&raw, 16),
            color_table_entries: u16_at(&raw, 20),
            palette_count: u16_at(&raw, 24),
            frame_count: u16_at(&raw, 28),
        };

        if header.frame_count == 0 {
            return Ok(Self {
                header,
                color_table: Vec::new(),
                frames: Vec::new(),
            });
        }

        let frame_headers = read_frame_headers(reader, &header)?;
        let color_table = read_color_table(reader, &header)?;

        let mut frames = Vec::with_capacity(frame_headers.len());
        for (index, entry) in frame_headers.iter().enumerate() {
            frames.push(decode_frame(reader, &header, index, entry, &color_table)?);
        }

        log::debug!(
            "parsed sprite atlas: {} frames, {} color table entries",
            frames.len(),
            color_table.len()
        );

        Ok(Self {
            header,
            color_table,
            frames,
        })
    }

    /// Opens and parses a sprite atlas from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::parse(&mut BufReader::new(file))
    }
}

fn read_frame_headers<R: Read + Seek>(reader: &mut R, header: &Header) -> Result<Vec<FrameHeader>> {
    reader.seek(SeekFrom::Start(u64::from(header.frame_header_offset)))?;

    let expected = usize::from(header.frame_count);
    let mut headers = Vec::with_capacity(expected);

    for index in 0..expected {
        let entry: [u8; FRAME_HEADER_SIZE] = reader.read_array().map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                Error::MissingFrameHeaders { expected, index }
            } else {
                Error::Io(e)
            }
        })?;

        let frame_type = FrameType::try_from(entry[0])
            .map_err(|tag| Error::UnknownFrameType { frame: index, tag })?;
        let compression = Compression::try_from(entry[1])
            .map_err(|tag| Error::UnknownCompression { frame: index, tag })?;

        // Like the file header, the u16 fields past the dimensions sit in
        // 4-byte slots. The final 4 bytes of the entry carry no data.
        headers.push(FrameHeader {
            frame_type,
            compression,
            color_count: u16_at(&entry, 2),
            x: u16_at(&entry, 4),
            y: u16_at(&entry, 6),
            width: u16_at(&entry, 8),
            height: u16_at(&entry, 10),
            data_offset: u32::from_le_bytes([entry[12], entry[13], entry[14], entry[15]]),
            compressed_size: u16_at(&entry, 16),
            color_table_offset: u16_at(&entry, 24),
        });
    }

    Ok(headers)
}

fn read_color_table<R: Read + Seek>(reader: &mut R, header: &Header) -> Result<Vec<Color>> {
    reader.seek(SeekFrom::Start(u64::from(header.color_table_offset)))?;

    let mut colors = Vec::with_capacity(usize::from(header.color_table_entries));
    for _ in 0..header.color_table_entries {
        let entry: [u8; 4] = reader.read_array()?;
        colors.push(Color::from_bgrx(entry));
    }

    Ok(colors)
}

fn decode_frame<R: Read + Seek>(
    reader: &mut R,
    header: &Header,
    index: usize,
    info: &FrameHeader,
    color_table: &[Color],
) -> Result<Frame> {
    let mut rgba = Vec::new();

    if info.frame_type != FrameType::Empty {
        reader.seek(SeekFrom::Start(
            u64::from(header.frame_data_offset) + u64::from(info.data_offset),
        ))?;
        let compressed = reader.read_vec(usize::from(info.compressed_size))?;

        let indices = match info.compression {
            Compression::Stored => compressed,
            Compression::PackBits => rle::unpack_bits(&compressed[..])?,
            Compression::ZeroRuns => rle::unpack_zero_runs(&compressed[..])?,
        };

        let expected = usize::from(info.width) * usize::from(info.height);
        if indices.len() != expected {
            return Err(Error::RasterSizeMismatch {
                frame: index,
                expected,
                actual: indices.len(),
            });
        }

        let base = usize::from(info.color_table_offset);
        rgba.reserve_exact(indices.len() * 4);
        for &pixel in &indices {
            let slot = base + usize::from(pixel);
            let color = color_table.get(slot).ok_or(Error::ColorIndexOutOfRange {
                frame: index,
                index: slot,
                table_len: color_table.len(),
            })?;
            rgba.extend_from_slice(&[color.r, color.g, color.b, color.a]);
        }

        match info.frame_type {
            FrameType::FlipHorizontally => flip_horizontal(&mut rgba, usize::from(info.width)),
            FrameType::FlipVertically => flip_vertical(&mut rgba, usize::from(info.width)),
            FrameType::FlipBoth => {
                flip_horizontal(&mut rgba, usize::from(info.width));
                flip_vertical(&mut rgba, usize::from(info.width));
            }
            FrameType::Repeat | FrameType::Normal | FrameType::Empty => {}
        }
    }

    Ok(Frame {
        frame_type: info.frame_type,
        compression: info.compression,
        x: info.x,
        y: info.y,
        width: info.width,
        height: info.height,
        color_count: info.color_count,
        color_table_offset: info.color_table_offset,
        rgba,
    })
}

/// Reverses the pixels within each row, mirroring across the vertical axis.
fn flip_horizontal(rgba: &mut [u8], width: usize) {
    if width == 0 {
        return;
    }
    for row in rgba.chunks_exact_mut(width * 4) {
        for x in 0..width / 2 {
            let left = x * 4;
            let right = (width - 1 - x) * 4;
            for channel in 0..4 {
                row.swap(left + channel, right + channel);
            }
        }
    }
}

/// Reverses the row order, mirroring across the horizontal axis.
fn flip_vertical(rgba: &mut [u8], width: usize) {
    if width == 0 {
        return;
    }
    let row_len = width * 4;
    let height = rgba.len() / row_len;
    for y in 0..height / 2 {
        let top = y * row_len;
        let bottom = (height - 1 - y) * row_len;
        for offset in 0..row_len {
            rgba.swap(top + offset, bottom + offset);
        }
    }
}
