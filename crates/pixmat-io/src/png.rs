use std::{fs, path::Path};

use pixmat_image::{ImageSize, PixelMatrix};
use png::{BitDepth, ColorType, Decoder, Encoder, Limits, Transformations};

use crate::error::IoError;

/// The eight bytes every PNG stream starts with.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Upper bound on the memory the decoder may allocate, 1 GiB.
///
/// Enough for a 16384x16384 RGBA image.
pub const DECODE_LIMIT_BYTES: usize = 1 << 30;

/// Check whether `bytes` starts with the PNG signature.
///
/// Inputs shorter than the signature are never PNG.
///
/// # Example
///
/// ```
/// use pixmat_io::png::{has_png_signature, PNG_SIGNATURE};
///
/// assert!(has_png_signature(&PNG_SIGNATURE));
/// assert!(!has_png_signature(b"GIF89a.."));
/// ```
pub fn has_png_signature(bytes: &[u8]) -> bool {
    bytes.starts_with(&PNG_SIGNATURE)
}

/// Read a PNG image as four channels (rgba8).
///
/// The file must start with the PNG signature. Any PNG color type is
/// accepted and converted to 8-bit RGBA, see [`decode_image_png_rgba8`].
///
/// # Arguments
///
/// * `file_path` - The path to the PNG file.
///
/// # Returns
///
/// A RGBA image with four channels (rgba8).
pub fn read_image_png_rgba8(file_path: impl AsRef<Path>) -> Result<PixelMatrix, IoError> {
    // verify the file exists
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let bytes = fs::read(file_path)?;
    log::debug!("read {} bytes from {}", bytes.len(), file_path.display());

    decode_image_png_rgba8(&bytes)
}

/// Writes the given image as a PNG _(rgba8)_ to the given file path.
///
/// The image is fully encoded in memory before the file is created, so an
/// encoding failure never leaves a partial file behind.
///
/// # Arguments
///
/// - `file_path` - The path to the PNG image.
/// - `image` - The image to write.
pub fn write_image_png_rgba8(
    file_path: impl AsRef<Path>,
    image: &PixelMatrix,
) -> Result<(), IoError> {
    let bytes = encode_image_png_rgba8(image)?;
    fs::write(file_path.as_ref(), bytes)?;
    log::debug!("wrote {} to {}", image.size(), file_path.as_ref().display());
    Ok(())
}

/// Decodes a PNG image with four channels (rgba8) from raw bytes.
///
/// The bytes are rejected with [`IoError::NotPng`] before decoding if they do
/// not start with [`PNG_SIGNATURE`]. Palette images and sub-byte depths are
/// expanded, `tRNS` transparency becomes the alpha channel, 16-bit samples
/// keep their most significant byte, grey is replicated to RGB and a missing
/// alpha channel is set to 255.
///
/// # Arguments
///
/// - `bytes` - Raw bytes of the png file
pub fn decode_image_png_rgba8(bytes: &[u8]) -> Result<PixelMatrix, IoError> {
    if !has_png_signature(bytes) {
        return Err(IoError::NotPng);
    }

    let mut decoder = Decoder::new_with_limits(
        bytes,
        Limits {
            bytes: DECODE_LIMIT_BYTES,
        },
    );
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    if info.bit_depth != BitDepth::Eight {
        return Err(IoError::PngDecodeError(format!(
            "unsupported bit depth after expansion: {:?}",
            info.bit_depth
        )));
    }

    let size = ImageSize {
        width: info.width as usize,
        height: info.height as usize,
    };
    log::debug!("decoded png {} with color type {:?}", size, info.color_type);

    let rgba = expand_to_rgba8(&buf, size, info.line_size, info.color_type)?;

    Ok(PixelMatrix::from_raw_rgba8(size, rgba)?)
}

// utility function to bring any 8-bit color type to interleaved rgba
fn expand_to_rgba8(
    buf: &[u8],
    size: ImageSize,
    line_size: usize,
    color_type: ColorType,
) -> Result<Vec<u8>, IoError> {
    let channels = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::PngDecodeError(
                "palette was not expanded".to_string(),
            ))
        }
    };

    let mut rgba = Vec::with_capacity(size.area() * 4);
    if size.area() == 0 {
        return Ok(rgba);
    }

    for row in buf.chunks(line_size).take(size.height) {
        for px in row.chunks_exact(channels).take(size.width) {
            let pixel = match *px {
                [l] => [l, l, l, 255],
                [l, a] => [l, l, l, a],
                [r, g, b] => [r, g, b, 255],
                [r, g, b, a] => [r, g, b, a],
                _ => unreachable!("chunks have exactly {channels} channels"),
            };
            rgba.extend_from_slice(&pixel);
        }
    }

    Ok(rgba)
}

/// Encodes an image as a PNG _(rgba8)_ in memory.
///
/// # Arguments
///
/// - `image` - The image to encode.
///
/// # Errors
///
/// Returns [`IoError::PngEncodingError`] if the image has no pixels or the
/// encoder fails.
pub fn encode_image_png_rgba8(image: &PixelMatrix) -> Result<Vec<u8>, IoError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(IoError::PngEncodingError(format!(
            "cannot encode an image of {}",
            image.size()
        )));
    }

    let width = u32::try_from(image.width())
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    let height = u32::try_from(image.height())
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;

    let mut out = Vec::new();

    let mut encoder = Encoder::new(&mut out, width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .write_image_data(&image.to_raw_rgba8())
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .finish()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;

    Ok(out)
}
