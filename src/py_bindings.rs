use crate::config::SegmenterConfig;
use crate::error::ConfigError;
use crate::sampler::Segmenter;
use crate::types::{Boundary, Splitter};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use std::panic::{catch_unwind, AssertUnwindSafe};

fn config_err(err: ConfigError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn panic_payload_to_string(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_string();
    }
    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }
    "unknown panic payload".to_string()
}

#[pyclass(name = "Segmenter")]
pub struct PySegmenter {
    inner: Segmenter,
}

#[pymethods]
impl PySegmenter {
    #[new]
    #[pyo3(signature = (
        documents,
        concentration=20_000.0,
        continue_prob=0.67,
        anneal_iters=100,
        extra_iters=100,
        min_count=5,
        min_length=1,
        seed=1234,
        splitter="delimiter",
        line_delimiter=Some("\n"),
        sentencex_language="en",
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        documents: Vec<String>,
        concentration: f64,
        continue_prob: f64,
        anneal_iters: usize,
        extra_iters: usize,
        min_count: i64,
        min_length: usize,
        seed: u64,
        splitter: &str,
        line_delimiter: Option<&str>,
        sentencex_language: &str,
    ) -> PyResult<Self> {
        let config = SegmenterConfig {
            concentration,
            continue_prob,
            anneal_iters,
            extra_iters,
            min_count,
            min_length,
            seed,
        };
        let splitter =
            Splitter::parse(splitter, line_delimiter, sentencex_language).map_err(config_err)?;
        let inner = Segmenter::from_documents(&documents, splitter, config).map_err(config_err)?;
        Ok(Self { inner })
    }

    fn run(&mut self, py: Python<'_>) -> PyResult<()> {
        let result = py.allow_threads(|| {
            catch_unwind(AssertUnwindSafe(|| self.inner.run())).map_err(panic_payload_to_string)
        });
        result.map_err(|message| {
            PyRuntimeError::new_err(format!("dpseg sampler panicked during run(): {message}"))
        })
    }

    #[pyo3(signature = (min_count=None, min_length=None))]
    fn lexicon(&self, min_count: Option<i64>, min_length: Option<usize>) -> Vec<(String, i64)> {
        let min_count = min_count.unwrap_or(self.inner.config.min_count);
        let min_length = min_length.unwrap_or(self.inner.config.min_length);
        self.inner
            .filtered_entries(min_count, min_length)
            .into_iter()
            .map(|entry| (entry.surface, entry.count))
            .collect()
    }

    fn units(&self) -> Vec<Vec<String>> {
        self.inner.units()
    }

    fn boundaries(&self) -> Vec<u8> {
        self.inner
            .boundaries()
            .iter()
            .map(|mark| match mark {
                Boundary::Merged => 0,
                Boundary::Split => 1,
                Boundary::Fixed => 2,
            })
            .collect()
    }

    fn length_histogram(&self) -> (Vec<i64>, Vec<i64>) {
        let histogram = self.inner.length_histogram();
        (histogram.type_counts(), histogram.token_counts())
    }
}

#[pymodule(gil_used = true)]
fn _core(_py: Python<'_>, module: &Bound<'_, PyModule>) -> PyResult<()> {
    module.add_class::<PySegmenter>()?;
    Ok(())
}
