use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use clap::{App, load_yaml};

use pizza_mis::search::dfs_bnb::dfs_bnb;
use pizza_mis::search::parallel_bnb::{parallel_bnb, DEFAULT_MAX_WORKERS};
use pizza_mis::stopping::Cancellation;
use pizza_mis::util::{export_results, read_params, SearchStats};

/** solves a pizza instance by (possibly parallel) branch & bound.
Anytime: when the time limit trips the cancellation flag, the best solution
found so far is written out. */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("bnb.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let (inst_filename, instance, t, sol_file, perf_file) = read_params(&main_args);
    let nb_workers: usize = match main_args.value_of("workers") {
        None => DEFAULT_MAX_WORKERS,
        Some(w) => w.parse().expect("unable to parse the number of workers"),
    };
    // build the conflict graph
    let graph = Arc::new(instance.conflict_graph());
    graph.display_statistics();
    // arm the time limit (0 = run to optimality)
    let cancel = Cancellation::new();
    if t > 0. {
        let watchdog = cancel.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_secs_f32(t));
            println!("time limit reached, writing best solution found so far...");
            watchdog.cancel();
        });
    }
    // solve it
    let time_init = Instant::now();
    let clients = if nb_workers <= 1 {
        dfs_bnb(&graph, &cancel)
    } else {
        parallel_bnb(graph.clone(), &cancel, nb_workers)
    };
    let time_searched = time_init.elapsed().as_secs_f32();
    println!("branch and bound: {} satisfied clients", clients.len());
    // export results
    let stats = SearchStats {
        nb_satisfied: clients.len(),
        time_searched,
        inst_name: inst_filename,
    };
    export_results(&instance, &graph, &clients, &stats, perf_file, sol_file, true);
}
