use std::collections::BTreeSet;
use std::fs;

use nom::IResult;
use nom::bytes::complete::take_till1;
use nom::character::complete::{digit1, multispace0};
use nom::sequence::preceded;

use crate::graph::{ConflictGraph, VertexId};

/** models a client preference instance: each client likes some ingredients
and dislikes others. A client is satisfied iff every liked ingredient is on
the pizza and no disliked ingredient is. */
#[derive(Debug)]
pub struct PizzaInstance {
    /// likes[i]: ingredients client i wants on the pizza
    likes: Vec<BTreeSet<String>>,
    /// dislikes[i]: ingredients client i refuses
    dislikes: Vec<BTreeSet<String>>,
}

/// reads an integer, skipping leading whitespace
fn read_usize(s: &str) -> IResult<&str, usize> {
    let (remaining, digits) = preceded(multispace0, digit1)(s)?;
    Ok((remaining, digits.parse::<usize>().unwrap()))
}

/// reads an ingredient name, skipping leading whitespace
fn read_word(s: &str) -> IResult<&str, &str> {
    preceded(multispace0, take_till1(|c: char| c.is_whitespace()))(s)
}

/// reads a counted ingredient list ("K ing1 ... ingK")
fn read_ingredient_list(s: &str) -> IResult<&str, BTreeSet<String>> {
    let (mut remaining, nb) = read_usize(s)?;
    let mut res = BTreeSet::new();
    for _ in 0..nb {
        let (rem2, word) = read_word(remaining)?;
        remaining = rem2;
        res.insert(word.to_string());
    }
    Ok((remaining, res))
}

impl PizzaInstance {

    /// constructor from per-client like/dislike sets
    pub fn new(likes: Vec<BTreeSet<String>>, dislikes: Vec<BTreeSet<String>>) -> Self {
        assert_eq!(likes.len(), dislikes.len());
        Self { likes, dislikes }
    }

    /** parses the hashcode input format: the number of clients, then for
    each client a counted line of liked ingredients and a counted line of
    disliked ones. */
    pub fn from_str(content: &str) -> Self {
        let (mut remaining, nb_clients) = read_usize(content)
            .expect("PizzaInstance: unable to read the number of clients");
        let mut likes = Vec::with_capacity(nb_clients);
        let mut dislikes = Vec::with_capacity(nb_clients);
        for _ in 0..nb_clients {
            let (rem2, like_set) = read_ingredient_list(remaining)
                .expect("PizzaInstance: unable to read a like list");
            let (rem3, dislike_set) = read_ingredient_list(rem2)
                .expect("PizzaInstance: unable to read a dislike list");
            remaining = rem3;
            likes.push(like_set);
            dislikes.push(dislike_set);
        }
        Self::new(likes, dislikes)
    }

    /// creates an instance from an input file
    pub fn from_file(filename: &str) -> Self {
        let content = fs::read_to_string(filename)
            .expect("PizzaInstance: unable to read file");
        Self::from_str(content.replace('\r', "").as_str())
    }

    /// number of clients
    pub fn nb_clients(&self) -> usize { self.likes.len() }

    /// ingredients liked by client i
    pub fn likes(&self, i: VertexId) -> &BTreeSet<String> { &self.likes[i] }

    /// ingredients disliked by client i
    pub fn dislikes(&self, i: VertexId) -> &BTreeSet<String> { &self.dislikes[i] }

    /** builds the conflict graph: clients i and j conflict iff one's liked
    ingredient is the other's disliked ingredient (in either direction). */
    pub fn conflict_graph(&self) -> ConflictGraph {
        let n = self.nb_clients();
        let mut adj_list: Vec<Vec<VertexId>> = vec![Vec::new(); n];
        for i in 0..n {
            for j in (i + 1)..n {
                let conflict = self.likes[i].iter().any(|ing| self.dislikes[j].contains(ing))
                    || self.likes[j].iter().any(|ing| self.dislikes[i].contains(ing));
                if conflict {
                    adj_list[i].push(j);
                    adj_list[j].push(i);
                }
            }
        }
        ConflictGraph::new(adj_list)
    }

    /// union of the ingredients liked by the given clients (the pizza to bake)
    pub fn ingredients(&self, clients: &[VertexId]) -> Vec<String> {
        let mut res = BTreeSet::new();
        for client in clients {
            for ing in &self.likes[*client] {
                res.insert(ing.clone());
            }
        }
        res.into_iter().collect()
    }

    /// encodes a client subset as a submission line ("K ing1 ... ingK")
    pub fn solution_to_string(&self, clients: &[VertexId]) -> String {
        let ingredients = self.ingredients(clients);
        let mut res = format!("{}", ingredients.len());
        for ing in &ingredients {
            res += format!(" {}", ing).as_str();
        }
        res += "\n";
        res
    }

    /// writes the submission line for a client subset into a file
    pub fn write_solution(&self, filename: &str, clients: &[VertexId]) {
        fs::write(filename, self.solution_to_string(clients))
            .unwrap_or_else(|_|
                panic!("write_solution: unable to write the solution in {}", filename)
            );
    }

    /// print statistics of the instance
    pub fn display_statistics(&self) {
        let mut all_ingredients = BTreeSet::new();
        for set in self.likes.iter().chain(self.dislikes.iter()) {
            for ing in set { all_ingredients.insert(ing.as_str()); }
        }
        println!("\t{} \t clients", self.nb_clients());
        println!("\t{} \t distinct ingredients", all_ingredients.len());
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::dfs_bnb::dfs_bnb;
    use crate::stopping::Cancellation;

    const EXAMPLE: &str = "3\n\
        2 cheese peppers\n\
        0\n\
        1 basil\n\
        1 pineapple\n\
        2 mushrooms tomatoes\n\
        1 basil\n";

    #[test]
    fn test_parse_example() {
        let inst = PizzaInstance::from_str(EXAMPLE);
        assert_eq!(inst.nb_clients(), 3);
        assert!(inst.likes(0).contains("cheese"));
        assert!(inst.likes(0).contains("peppers"));
        assert!(inst.dislikes(0).is_empty());
        assert!(inst.dislikes(1).contains("pineapple"));
        assert!(inst.dislikes(2).contains("basil"));
    }

    #[test]
    fn test_conflict_graph_example() {
        let inst = PizzaInstance::from_str(EXAMPLE);
        let graph = inst.conflict_graph();
        assert_eq!(graph.n(), 3);
        // client 1 likes basil, client 2 dislikes it
        assert!(graph.are_adjacent(1, 2));
        assert!(!graph.are_adjacent(0, 1));
        assert!(!graph.are_adjacent(0, 2));
    }

    #[test]
    fn test_solve_example() {
        let inst = PizzaInstance::from_str(EXAMPLE);
        let graph = inst.conflict_graph();
        let sol = dfs_bnb(&graph, &Cancellation::new());
        assert_eq!(sol.len(), 2); // client 0 plus one of {1, 2}
    }

    #[test]
    fn test_ingredients_union() {
        let inst = PizzaInstance::from_str(EXAMPLE);
        assert_eq!(inst.ingredients(&[0, 1]), vec!["basil", "cheese", "peppers"]);
        assert_eq!(inst.solution_to_string(&[0, 1]), "3 basil cheese peppers\n");
    }
}
