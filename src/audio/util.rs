use std::io::Cursor;

use rodio::{
    Decoder, Device, DeviceTrait, OutputStream, OutputStreamBuilder,
    cpal::{
        BufferSize, SampleFormat, SampleRate, StreamConfig, default_host,
        traits::HostTrait,
    },
};

use crate::{audio::error::AudioError, catalog::MediaLocation};

pub fn setup_device_config() -> Result<(Device, StreamConfig, SampleFormat), AudioError> {
    let host = default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| AudioError::DeviceError("no default output device".to_string()))?;

    let best = device
        .supported_output_configs()
        .ok()
        .and_then(|configs| configs.max_by_key(|cfg| cfg.max_sample_rate().0));

    let (config, sample_format) = match best {
        Some(default_config) => (
            StreamConfig {
                channels: default_config.channels(),
                sample_rate: default_config.max_sample_rate(),
                buffer_size: BufferSize::Fixed(4096),
            },
            default_config.sample_format(),
        ),
        None => (
            StreamConfig {
                channels: 2,
                sample_rate: SampleRate(48000),
                buffer_size: BufferSize::Fixed(4096),
            },
            SampleFormat::F32,
        ),
    };

    Ok((device, config, sample_format))
}

pub fn open_output_stream(
    device: Device,
    config: &StreamConfig,
    sample_format: SampleFormat,
) -> Result<OutputStream, AudioError> {
    OutputStreamBuilder::default()
        .with_buffer_size(config.buffer_size)
        .with_sample_rate(config.sample_rate.0)
        .with_device(device)
        .with_sample_format(sample_format)
        .open_stream_or_fallback()
        .map_err(|e| AudioError::DeviceError(e.to_string()))
}

/// Reads the whole media file into memory. Blocking.
pub fn read_media(location: &MediaLocation) -> Result<Vec<u8>, AudioError> {
    match location {
        MediaLocation::File(path) => Ok(std::fs::read(path)?),
        MediaLocation::Url(url) => {
            let response = reqwest::blocking::get(url.clone())?.error_for_status()?;
            Ok(response.bytes()?.to_vec())
        }
    }
}

pub fn decode(
    bytes: Vec<u8>,
    hint: Option<&str>,
) -> Result<Decoder<Cursor<Vec<u8>>>, AudioError> {
    let byte_len = bytes.len() as u64;
    let mut builder = Decoder::builder()
        .with_data(Cursor::new(bytes))
        .with_byte_len(byte_len)
        .with_coarse_seek(true)
        .with_gapless(true);
    if let Some(hint) = hint {
        builder = builder.with_hint(hint);
    }
    builder
        .build()
        .map_err(|e| AudioError::DecodingError(e.to_string()))
}
