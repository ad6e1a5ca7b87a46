use clap::ArgMatches;
use serde::Serialize;

use crate::graph::{ConflictGraph, VertexId, checker};
use crate::pizza::PizzaInstance;

/// search statistics exported to the perf file
#[derive(Debug, Serialize)]
pub struct SearchStats {
    /// number of satisfied clients in the final solution
    pub nb_satisfied: usize,
    /// time spent searching (seconds)
    pub time_searched: f32,
    /// instance file name
    pub inst_name: String,
}

/** reads command line input and returns the instance name, the instance,
the time limit, and the optional solution/perf filenames */
pub fn read_params(main_args: &ArgMatches) -> (String, PizzaInstance, f32, Option<String>, Option<String>) {
    let inst_filename = main_args.value_of("instance").unwrap();
    let t: f32 = main_args.value_of("time").unwrap().parse::<f32>()
        .expect("unable to parse the time given");
    // read value of the solution filename
    let sol_file: Option<String> = match main_args.value_of("solution") {
        None => None,
        Some(e) => {
            println!("printing solutions in: {}", e);
            Some(e.to_string())
        }
    };
    // read value of the performance logs filename
    let perf_file: Option<String> = match main_args.value_of("perf") {
        None => None,
        Some(e) => {
            println!("printing perfs in: {}\n", e);
            Some(e.to_string())
        }
    };
    // read instance file
    let instance = PizzaInstance::from_file(inst_filename);
    instance.display_statistics();
    println!("=======================");
    (inst_filename.to_string(), instance, t, sol_file, perf_file)
}

/// exports search results to files
pub fn export_results(
    instance: &PizzaInstance,
    graph: &ConflictGraph,
    clients: &[VertexId],
    stats: &SearchStats,
    perf_file: Option<String>,
    sol_file: Option<String>,
    check_result: bool,
) {
    // export statistics
    match perf_file {
        None => {},
        Some(filename) => {
            let encoded = serde_json::to_string(stats).unwrap();
            std::fs::write(filename.as_str(), encoded)
                .unwrap_or_else(|why| panic!("couldn't write {}: {}", filename, why));
        }
    }
    // export solution
    match sol_file {
        None => {},
        Some(filename) => {
            if check_result && checker(graph, clients).is_none() {
                println!("invalid solution (conflicting clients selected)");
            }
            instance.write_solution(filename.as_str(), clients);
        }
    }
}
