use std::thread;
use std::time::{Duration, Instant};

use clap::{App, load_yaml};

use pizza_mis::search::best_first::best_first;
use pizza_mis::stopping::Cancellation;
use pizza_mis::util::{export_results, read_params, SearchStats};

/** solves a pizza instance by best-first branch & bound: frames are explored
in decreasing order of a greedy satisfiability estimate. */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("best_first.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let (inst_filename, instance, t, sol_file, perf_file) = read_params(&main_args);
    // build the conflict graph
    let graph = instance.conflict_graph();
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
    let clients = best_first(&graph, &cancel);
    let time_searched = time_init.elapsed().as_secs_f32();
    println!("best first search: {} satisfied clients", clients.len());
    // export results
    let stats = SearchStats {
        nb_satisfied: clients.len(),
        time_searched,
        inst_name: inst_filename,
    };
    export_results(&instance, &graph, &clients, &stats, perf_file, sol_file, true);
}
