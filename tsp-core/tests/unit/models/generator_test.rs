use super::*;

#[test]
fn can_generate_complete_graph() {
    let graph = GraphGenerator::new(6).with_seed(1).with_max_weight(10).build();

    assert_eq!(graph.size(), 6);
    assert!(graph.is_complete());
    assert!(graph.vertices().iter().flat_map(|vertex| vertex.edges()).all(|edge| edge.weight >= 1. && edge.weight <= 10.));
    assert!(graph.vertices().iter().flat_map(|vertex| vertex.edges()).all(|edge| edge.is_paired));
}

#[test]
fn can_generate_same_graph_with_same_seed() {
    let weights = |seed| {
        let graph = GraphGenerator::new(5).with_seed(seed).build();
        graph.vertices().iter().flat_map(|vertex| vertex.edges()).map(|edge| edge.weight).collect::<Vec<_>>()
    };

    assert_eq!(weights(42), weights(42));
}

#[test]
fn can_generate_geographic_graph() {
    let area = (52.3, 13.1, 52.7, 13.7);

    let graph = GraphGenerator::new(5).with_seed(3).with_area(area).build();

    assert!(graph.vertices().iter().all(|vertex| {
        let Coordinate { lat, lng } = *vertex.coordinate();
        (area.0..area.2).contains(&lat) && (area.1..area.3).contains(&lng)
    }));
    assert!(graph.vertices().iter().flat_map(|vertex| vertex.edges()).all(|edge| {
        let (from, to) = (graph.find_vertex(edge.origin).unwrap(), graph.find_vertex(edge.destination).unwrap());
        edge.weight == haversine_distance(from.coordinate(), to.coordinate()).round()
    }));
}

#[test]
fn can_generate_empty_graph() {
    let graph = GraphGenerator::new(0).build();

    assert!(graph.is_empty());
}
