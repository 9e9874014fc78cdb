//! Fan-in: interleave any number of receivers into one, closing it only after all are drained.

use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, Sender, bounded};
use std::thread::{self, JoinHandle};

use crate::utils::config::HANDOFF_CAP;

/// Merged stream plus the drain threads feeding it. Each handle returns the number of items it
/// forwarded.
pub struct Merged<T> {
    pub output: Receiver<T>,
    pub handles: Vec<JoinHandle<usize>>,
}

fn drain_loop<T>(input: Receiver<T>, output: Sender<T>) -> usize {
    let mut n = 0_usize;
    for item in input.iter() {
        if output.send(item).is_err() {
            break;
        }
        n += 1;
    }
    n
}

/// One drain thread per input, each holding a clone of the output sender. The output closes
/// when the last clone is dropped, i.e. after every input has closed and been drained.
/// With no inputs the output is closed immediately.
pub fn merge<T: Send + 'static>(inputs: Vec<Receiver<T>>) -> Result<Merged<T>> {
    let (output_tx, output) = bounded::<T>(HANDOFF_CAP);
    let mut handles = Vec::with_capacity(inputs.len());
    for (i, input) in inputs.into_iter().enumerate() {
        let output_tx = output_tx.clone();
        let handle = thread::Builder::new()
            .name(format!("merge-{i}"))
            .spawn(move || drain_loop(input, output_tx))
            .context("spawn merge thread")?;
        handles.push(handle);
    }
    // Dropping the last sender closes the channel once the drain threads are done.
    drop(output_tx);
    Ok(Merged { output, handles })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::time::Duration;

    #[test]
    fn test_no_inputs_closes_immediately() {
        let merged = merge::<u32>(Vec::new()).unwrap();
        assert!(merged.output.recv().is_err());
        assert!(merged.handles.is_empty());
    }

    #[test]
    fn test_waits_for_slow_input() {
        let (fast_tx, fast_rx) = bounded::<u32>(0);
        let (slow_tx, slow_rx) = bounded::<u32>(0);
        let merged = merge(vec![fast_rx, slow_rx]).unwrap();

        let fast = thread::spawn(move || {
            for i in 0..3 {
                fast_tx.send(i).unwrap();
            }
        });
        let slow = thread::spawn(move || {
            for i in 100..103 {
                thread::sleep(Duration::from_millis(20));
                slow_tx.send(i).unwrap();
            }
        });

        let got: HashSet<u32> = merged.output.iter().collect();
        fast.join().unwrap();
        slow.join().unwrap();

        let want: HashSet<u32> = [0, 1, 2, 100, 101, 102].into_iter().collect();
        assert_eq!(got, want);
        let forwarded: Vec<usize> = merged.handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(forwarded, vec![3, 3]);
    }
}
