use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use numpy::PyReadonlyArray2;
use once_cell::sync::Lazy;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::config::MiningConfig;
use crate::error::MiningError;
use crate::mining::{
    enumerate_with, finalize_ranking, index_matrix_pass, index_pass, mine, mine_itemsets,
    rank_items_with, FrequentItemsets, StreamingState, TransactionIndex,
};

// Global storage for streaming miners
static PROCESSORS: Lazy<Mutex<HashMap<usize, StreamingState>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));
static NEXT_PID: Lazy<Mutex<usize>> = Lazy::new(|| Mutex::new(0));

impl From<MiningError> for PyErr {
    fn from(err: MiningError) -> Self {
        match err {
            MiningError::EmptyTable
            | MiningError::MalformedToken { .. }
            | MiningError::InvalidMinSupport(_)
            | MiningError::Config(_) => PyValueError::new_err(err.to_string()),
            _ => PyRuntimeError::new_err(err.to_string()),
        }
    }
}

type PyItemsets = Vec<(Vec<usize>, usize)>;

fn into_py_itemsets(results: FrequentItemsets) -> PyItemsets {
    results.to_vec()
}

fn config_for(min_support: i64, parallel: bool) -> PyResult<MiningConfig> {
    Ok(MiningConfig::new(min_support)?.with_parallel(parallel))
}

fn processors() -> PyResult<MutexGuard<'static, HashMap<usize, StreamingState>>> {
    PROCESSORS
        .lock()
        .map_err(|e| PyRuntimeError::new_err(format!("Lock error: {}", e)))
}

/// Mine a binary transaction matrix (rows = transactions, columns = items).
#[pyfunction]
#[pyo3(signature = (transactions, min_support, parallel = false))]
fn mine_matrix(
    py: Python<'_>,
    transactions: PyReadonlyArray2<'_, i32>,
    min_support: i64,
    parallel: bool,
) -> PyResult<PyItemsets> {
    let config = config_for(min_support, parallel)?;
    let index = TransactionIndex::from_matrix(transactions.as_array())?;
    let rank = rank_items_with(&index, config.min_support, config.rank_filter);
    let results = py.allow_threads(|| enumerate_with(&rank, &config))?;
    Ok(into_py_itemsets(results))
}

/// Mine a list of transactions given as lists of item ids.
#[pyfunction]
#[pyo3(signature = (rows, min_support, parallel = false))]
fn mine_rows(
    py: Python<'_>,
    rows: Vec<Vec<usize>>,
    min_support: i64,
    parallel: bool,
) -> PyResult<PyItemsets> {
    let config = config_for(min_support, parallel)?;
    let results = py.allow_threads(|| mine(&rows, &config))?;
    Ok(into_py_itemsets(results))
}

#[pyfunction]
fn create_streaming_miner() -> PyResult<usize> {
    let mut pid_lock = NEXT_PID
        .lock()
        .map_err(|e| PyRuntimeError::new_err(format!("Lock error: {}", e)))?;
    let pid = *pid_lock;
    *pid_lock += 1;
    drop(pid_lock);

    processors()?.insert(pid, StreamingState::new());
    Ok(pid)
}

#[pyfunction]
fn streaming_index_pass(pid: usize, transactions: PyReadonlyArray2<'_, i32>) -> PyResult<()> {
    let mut processors = processors()?;
    let state = processors
        .get_mut(&pid)
        .ok_or_else(|| PyValueError::new_err("Invalid processor ID"))?;
    index_matrix_pass(state, transactions.as_array())?;
    Ok(())
}

#[pyfunction]
fn streaming_index_rows(pid: usize, rows: Vec<Vec<usize>>) -> PyResult<()> {
    let mut processors = processors()?;
    let state = processors
        .get_mut(&pid)
        .ok_or_else(|| PyValueError::new_err("Invalid processor ID"))?;
    index_pass(state, &rows)?;
    Ok(())
}

#[pyfunction]
#[pyo3(signature = (pid, min_support, parallel = false))]
fn streaming_finalize(pid: usize, min_support: i64, parallel: bool) -> PyResult<()> {
    let config = config_for(min_support, parallel)?;

    let mut processors = processors()?;
    let state = processors
        .get_mut(&pid)
        .ok_or_else(|| PyValueError::new_err("Invalid processor ID"))?;
    finalize_ranking(state, &config)?;
    Ok(())
}

#[pyfunction]
fn streaming_mine(pid: usize) -> PyResult<PyItemsets> {
    let processors = processors()?;
    let state = processors
        .get(&pid)
        .ok_or_else(|| PyValueError::new_err("Invalid processor ID"))?;
    Ok(into_py_itemsets(mine_itemsets(state)?))
}

#[pyfunction]
fn streaming_cleanup(pid: usize) -> PyResult<()> {
    processors()?
        .remove(&pid)
        .ok_or_else(|| PyValueError::new_err("Invalid processor ID"))?;
    Ok(())
}

#[pymodule]
fn simplicial(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(mine_matrix, m)?)?;
    m.add_function(wrap_pyfunction!(mine_rows, m)?)?;
    m.add_function(wrap_pyfunction!(create_streaming_miner, m)?)?;
    m.add_function(wrap_pyfunction!(streaming_index_pass, m)?)?;
    m.add_function(wrap_pyfunction!(streaming_index_rows, m)?)?;
    m.add_function(wrap_pyfunction!(streaming_finalize, m)?)?;
    m.add_function(wrap_pyfunction!(streaming_mine, m)?)?;
    m.add_function(wrap_pyfunction!(streaming_cleanup, m)?)?;
    Ok(())
}
