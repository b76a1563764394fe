//! Serializing many independent units in parallel.
//!
//! Each unit gets its own [`BitcodeWriter`] and its own output buffer; writers share no
//! state, so units are spread over a dedicated `rayon` pool without synchronization. The
//! pool size and the set of units to write come from a [`SerializeConfig`].
//!
//! # Examples
//!
//! ```rust
//! use docscope::bitcode::batch::{write_units, ExtractedUnit, SerializeConfig};
//!
//! let units = vec![
//!     ExtractedUnit::new("src/a.cpp", Vec::new()),
//!     ExtractedUnit::new("src/b.cpp", Vec::new()),
//! ];
//! let config = SerializeConfig::default()
//!     .with_concurrency(2)
//!     .with_include(vec!["src/b.cpp".to_string()]);
//!
//! let results = write_units(&units, &config)?;
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].0, "src/b.cpp");
//! assert!(results[0].1.is_ok());
//! # Ok::<(), docscope::Error>(())
//! ```

use rayon::{prelude::*, ThreadPoolBuilder};

use crate::{bitcode::writer::BitcodeWriter, metadata::InfoNode, Error, Result};

/// Settings of a batch run.
///
/// Loading these settings from configuration files is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SerializeConfig {
    /// Number of worker threads, `0` uses the available parallelism
    pub concurrency: usize,
    /// Names of the units to write, an empty list writes every unit
    pub include: Vec<String>,
}

impl SerializeConfig {
    /// Sets the number of worker threads.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Restricts the run to the named units.
    #[must_use]
    pub fn with_include(mut self, include: Vec<String>) -> Self {
        self.include = include;
        self
    }

    /// Returns true if the unit with the given name should be written.
    #[must_use]
    pub fn should_visit(&self, unit: &str) -> bool {
        self.include.is_empty() || self.include.iter().any(|name| name == unit)
    }

    /// Number of worker threads the pool will use.
    #[must_use]
    pub fn effective_concurrency(&self) -> usize {
        if self.concurrency == 0 {
            std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get)
        } else {
            self.concurrency
        }
    }
}

/// The extracted metadata of one source unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedUnit {
    /// Name of the unit, matched against [`SerializeConfig::include`]
    pub name: String,
    /// Top-level nodes, in output order
    pub infos: Vec<InfoNode>,
}

impl ExtractedUnit {
    /// Creates a unit.
    #[must_use]
    pub fn new(name: impl Into<String>, infos: Vec<InfoNode>) -> Self {
        ExtractedUnit {
            name: name.into(),
            infos,
        }
    }
}

/// Writes one unit into a fresh container.
///
/// # Errors
///
/// Returns the first error raised by the writer.
pub fn write_unit(unit: &ExtractedUnit) -> Result<Vec<u8>> {
    let mut writer = BitcodeWriter::new(Vec::new())?;
    for info in &unit.infos {
        writer.dispatch_info(info)?;
    }
    writer.finish()
}

/// Writes every unit accepted by `config` into its own container, in parallel.
///
/// Results are returned in input order as `(unit name, container)` pairs; a failure is
/// confined to the result of its unit. Units rejected by the include filter are left out.
///
/// # Errors
///
/// Returns [`crate::Error::Error`] if the worker pool cannot be created.
pub fn write_units(
    units: &[ExtractedUnit],
    config: &SerializeConfig,
) -> Result<Vec<(String, Result<Vec<u8>>)>> {
    let threads = config.effective_concurrency();
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|index| format!("docscope-writer-{index}"))
        .build()
        .map_err(|error| Error::Error(format!("failed to build writer pool: {error}")))?;

    log::debug!("writing {} units on {threads} threads", units.len());

    let results = pool.install(|| {
        units
            .par_iter()
            .filter(|unit| {
                let visit = config.should_visit(&unit.name);
                if !visit {
                    log::debug!("skipping unit {}", unit.name);
                }
                visit
            })
            .map(|unit| {
                let result = write_unit(unit);
                if let Err(error) = &result {
                    log::warn!("failed to write unit {}: {error}", unit.name);
                }
                (unit.name.clone(), result)
            })
            .collect::<Vec<_>>()
    });

    Ok(results)
}
