//! Image fetching and decoding.
//!
//! The resolver never talks to the network directly. It asks a
//! [`TextureFetcher`] for the decoded pixels behind a URL, which keeps the
//! selection pipeline testable and lets the transport own timeouts and
//! retries.
//!
//! ```text
//! TextureResolver ──► TextureFetcher (trait)
//!                          │
//!                          ▼
//!                  HttpTextureFetcher<C: AsyncHttpClient>
//!                          │  GET bytes, decode on blocking pool
//!                          ▼
//!                      RawTexture (RGBA8)
//! ```

mod http;

pub use http::{AsyncHttpClient, AsyncReqwestClient, DEFAULT_TIMEOUT_SECS};

#[cfg(test)]
pub use http::tests::MockAsyncHttpClient;

use std::fmt;
use std::future::Future;

use thiserror::Error;
use tracing::debug;

/// Errors raised while fetching or decoding an image.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(String),

    /// Server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Payload could not be decoded as an image.
    #[error("Decode failed: {0}")]
    Decode(String),
}

/// Decoded RGBA8 image ready for upload by the renderer.
#[derive(Clone, PartialEq, Eq)]
pub struct RawTexture {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RawTexture {
    /// Wrap RGBA8 pixel data.
    ///
    /// Returns `None` if `pixels` is not exactly `width * height * 4` bytes.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        (pixels.len() == expected).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}

impl fmt::Debug for RawTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawTexture")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

/// Fetches and decodes the image behind a URL.
pub trait TextureFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<RawTexture, FetchError>> + Send;
}

/// [`TextureFetcher`] that downloads over HTTP and decodes with `image`.
pub struct HttpTextureFetcher<C: AsyncHttpClient> {
    http_client: C,
}

impl<C: AsyncHttpClient> HttpTextureFetcher<C> {
    pub fn new(http_client: C) -> Self {
        Self { http_client }
    }

    pub fn http_client(&self) -> &C {
        &self.http_client
    }
}

impl<C: AsyncHttpClient> TextureFetcher for HttpTextureFetcher<C> {
    async fn fetch(&self, url: &str) -> Result<RawTexture, FetchError> {
        let bytes = self.http_client.get(url).await?;
        let len = bytes.len();

        // Decoding large JPEGs would stall the async workers
        let texture = tokio::task::spawn_blocking(move || decode_rgba(&bytes))
            .await
            .map_err(|e| FetchError::Decode(format!("Decode task failed: {}", e)))??;

        debug!(
            url = url,
            bytes = len,
            width = texture.width(),
            height = texture.height(),
            "Image decoded"
        );
        Ok(texture)
    }
}

/// Decode an encoded image (PNG, JPEG, ...) into RGBA8.
pub fn decode_rgba(bytes: &[u8]) -> Result<RawTexture, FetchError> {
    let rgba = image::load_from_memory(bytes)
        .map_err(|e| FetchError::Decode(e.to_string()))?
        .to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(RawTexture {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::Cursor;

    /// Encode a solid-color PNG for use as a canned HTTP body.
    pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }
}
