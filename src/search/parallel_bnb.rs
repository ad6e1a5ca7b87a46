use std::sync::{Arc, Condvar, Mutex};
use std::thread;

use crate::bound::exact_bound;
use crate::graph::{ConflictGraph, VertexId};
use crate::search::{Incumbent, SearchFrame};
use crate::stopping::Cancellation;

/// default cap on concurrently running search workers
pub const DEFAULT_MAX_WORKERS: usize = 128;

/// state shared by every worker: the incumbent, the active-worker counter
/// and the cancellation flag. Frame stacks are never shared.
#[derive(Debug)]
struct SharedSearch {
    graph: Arc<ConflictGraph>,
    incumbent: Incumbent,
    nb_workers: Mutex<usize>,
    all_done: Condvar,
    cancel: Cancellation,
    max_workers: usize,
}

/** depth-first branch & bound distributing frames over a bounded pool of
worker threads. Each worker runs the sequential loop on a private stack;
when a frame splits, each surviving child starts a new worker seeded with
just that frame if the pool is below `max_workers`, and stays on the local
stack otherwise (degrade-to-sequential on this branch). Workers share one
incumbent behind a mutex and poll the cancellation flag once per iteration;
the driver waits until the worker counter falls back to zero and reads the
incumbent as the answer. */
pub fn parallel_bnb(
    graph: Arc<ConflictGraph>,
    cancel: &Cancellation,
    max_workers: usize,
) -> Vec<VertexId> {
    let shared = Arc::new(SharedSearch {
        graph,
        incumbent: Incumbent::new(),
        nb_workers: Mutex::new(0),
        all_done: Condvar::new(),
        cancel: cancel.clone(),
        max_workers: max_workers.max(1),
    });
    spawn_worker(&shared, SearchFrame::root());
    let mut active = shared.nb_workers.lock().unwrap();
    while *active > 0 {
        active = shared.all_done.wait(active).unwrap();
    }
    drop(active);
    shared.incumbent.best()
}

/// unconditionally starts a detached worker seeded with one frame;
/// the counter must have been incremented by the caller
fn run_worker(shared: Arc<SharedSearch>, frame: SearchFrame) {
    thread::spawn(move || {
        worker_loop(&shared, vec![frame]);
        let mut nb = shared.nb_workers.lock().unwrap();
        *nb -= 1;
        if *nb == 0 {
            shared.all_done.notify_all();
        }
    });
}

/// registers and starts a new worker
fn spawn_worker(shared: &Arc<SharedSearch>, frame: SearchFrame) {
    let mut nb = shared.nb_workers.lock().unwrap();
    *nb += 1;
    drop(nb);
    run_worker(shared.clone(), frame);
}

/** hands the frame to a fresh worker if the pool has room, otherwise keeps
it on the local stack. Check and increment happen under a single lock
acquisition so the cap cannot be overshot. */
fn offload(shared: &Arc<SharedSearch>, frame: SearchFrame, stack: &mut Vec<SearchFrame>) {
    let mut nb = shared.nb_workers.lock().unwrap();
    if *nb < shared.max_workers {
        *nb += 1;
        drop(nb);
        run_worker(shared.clone(), frame);
    } else {
        drop(nb);
        stack.push(frame);
    }
}

/// the sequential branch & bound loop, against the shared incumbent
fn worker_loop(shared: &Arc<SharedSearch>, mut stack: Vec<SearchFrame>) {
    let n = shared.graph.n();
    while !shared.cancel.is_cancelled() {
        let frame = match stack.pop() {
            None => break,
            Some(f) => f,
        };
        if exact_bound(n, &frame) <= shared.incumbent.size() { continue; }
        shared.incumbent.update(&frame.included);
        if frame.person == n { continue; }
        let (exclude, include) = frame.split(&shared.graph);
        if exact_bound(n, &exclude) > shared.incumbent.size() {
            offload(shared, exclude, &mut stack);
        }
        if let Some(child) = include {
            if exact_bound(n, &child) > shared.incumbent.size() {
                offload(shared, child, &mut stack);
            }
        }
    }
}
