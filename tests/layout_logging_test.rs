//! Layout Logging Test
//!
//! `log_layout` reports every axis of the chosen specialization.

#![cfg(feature = "tracing")]

use std::io;
use std::sync::{Arc, Mutex};

use cond_params::compose::log_layout;
use cond_params::prelude::*;

#[derive(Component)]
struct WaterDepth {
    max_depth: f32,
}

#[derive(Component)]
struct Dem {
    ex: f32,
    ey: f32,
}

#[derive(Composed)]
struct Params<const DEPTH: bool, const DEM: bool>
where
    (): SelectBool<DEPTH> + SelectBool<DEM>,
{
    depth: CondStruct<DEPTH, WaterDepth>,
    dem: CondStruct<DEM, Dem>,
}

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("capture lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_log_layout_reports_axes() {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, log_layout::<Params<true, false>>);

    let bytes = capture.0.lock().expect("capture lock").clone();
    let output = String::from_utf8(bytes).expect("utf-8 log");
    assert!(output.contains("field=\"depth\""));
    assert!(output.contains("component=\"Dem\" enabled=false size=0"));
    assert!(output.contains("specialization selected"));
    assert!(output.contains("enabled=1 disabled=1"));

    let p = Params::<true, false>::construct(((10.0f32,), (0.0f32, 1.0f32)));
    assert_eq!(p.depth.max_depth, 10.0);
}
