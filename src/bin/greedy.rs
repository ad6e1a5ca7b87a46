use std::time::Instant;

use clap::{App, load_yaml};

use pizza_mis::graph::VertexId;
use pizza_mis::heuristics::{
    add_least_conflicting, fewest_preferences, least_dislikes,
    random_resolution, remove_most_conflicting, uniform_random_resolution,
};
use pizza_mis::util::{export_results, read_params, SearchStats};

/** runs every greedy construction heuristic on a pizza instance and keeps
the best client subset found. */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("greedy.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let (inst_filename, instance, _t, sol_file, perf_file) = read_params(&main_args);
    // build the conflict graph
    let graph = instance.conflict_graph();
    graph.display_statistics();
    // run the heuristics
    let time_init = Instant::now();
    let candidates: Vec<(&str, Vec<VertexId>)> = vec![
        ("most conflicting removal", remove_most_conflicting(&graph)),
        ("least conflicting insertion", add_least_conflicting(&graph)),
        ("random resolution", random_resolution(&graph)),
        ("uniform random resolution", uniform_random_resolution(&graph)),
        ("least dislikes", least_dislikes(&instance, &graph)),
        ("fewest preferences", fewest_preferences(&instance, &graph)),
    ];
    let time_searched = time_init.elapsed().as_secs_f32();
    for (name, clients) in &candidates {
        println!("{}: {} satisfied clients", name, clients.len());
    }
    let (best_name, clients) = candidates.into_iter()
        .max_by_key(|(_, clients)| clients.len()).unwrap();
    println!("keeping '{}' ({} satisfied clients)", best_name, clients.len());
    // export results
    let stats = SearchStats {
        nb_satisfied: clients.len(),
        time_searched,
        inst_name: inst_filename,
    };
    export_results(&instance, &graph, &clients, &stats, perf_file, sol_file, true);
}
