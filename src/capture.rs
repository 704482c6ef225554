use miniaudio::{Device, DeviceConfig, DeviceType, Format};
use std::sync::{Arc, Mutex};

/// Fixed-capacity ring of the most recent mono samples.
///
/// The capture callback pushes into it from the audio thread; the analyzer
/// takes a snapshot of the latest full window from the render thread. Only
/// the last `capacity` samples are ever retained.
pub struct SampleRing {
    buf: Vec<f32>,
    write_pos: usize,
    total_written: u64,
}

impl SampleRing {
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: vec![0.0; capacity],
            write_pos: 0,
            total_written: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Append samples, overwriting the oldest data once full.
    pub fn push(&mut self, samples: &[f32]) {
        for &sample in samples {
            self.buf[self.write_pos] = sample;
            self.write_pos = (self.write_pos + 1) % self.buf.len();
        }
        self.total_written += samples.len() as u64;
    }

    /// Copy the most recent `out.len()` samples into `out` in arrival order.
    /// Returns false (leaving `out` untouched) until that many samples have
    /// ever been written.
    pub fn snapshot_latest(&self, out: &mut [f32]) -> bool {
        let n = out.len();
        if n > self.buf.len() || self.total_written < n as u64 {
            return false;
        }

        // Oldest requested sample sits n slots behind the write position.
        let start = (self.write_pos + self.buf.len() - n) % self.buf.len();
        let first_run = (self.buf.len() - start).min(n);
        out[..first_run].copy_from_slice(&self.buf[start..start + first_run]);
        out[first_run..].copy_from_slice(&self.buf[..n - first_run]);
        true
    }
}

/// Owns the microphone capture device and the shared sample ring.
///
/// The device data callback runs on the audio backend's thread and only
/// touches the ring behind the mutex. Released exactly once on teardown;
/// `shutdown` is a no-op when the device handle is already gone.
pub struct MicCapture {
    device: Option<Device>,
    ring: Arc<Mutex<SampleRing>>,
    sample_rate: u32,
}

impl MicCapture {
    /// Open and start the capture stream (mono, f32).
    pub fn start(sample_rate: u32, window_size: usize) -> anyhow::Result<Self> {
        let ring = Arc::new(Mutex::new(SampleRing::new(window_size)));
        let cb_ring = Arc::clone(&ring);

        let mut config = DeviceConfig::new(DeviceType::Capture);
        config.capture_mut().set_format(Format::F32);
        config.capture_mut().set_channels(1);
        config.set_sample_rate(sample_rate);

        config.set_data_callback(move |_device, _output, input| {
            let samples = input.as_samples::<f32>();
            let mut ring = cb_ring.lock().unwrap();
            ring.push(samples);
        });

        let device = Device::new(None, &config)
            .map_err(|e| anyhow::anyhow!("Failed to create capture device: {:?}", e))?;

        device.start()
            .map_err(|e| anyhow::anyhow!("Failed to start capture device: {:?}", e))?;

        Ok(Self {
            device: Some(device),
            ring,
            sample_rate,
        })
    }

    pub fn ring(&self) -> Arc<Mutex<SampleRing>> {
        Arc::clone(&self.ring)
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Stop and release the device. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(device) = self.device.take() {
            let _ = device.stop();
        }
    }
}

impl Drop for MicCapture {
    fn drop(&mut self) {
        self.shutdown();
    }
}
