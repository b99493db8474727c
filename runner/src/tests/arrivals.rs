use core::module_path;
use function_name::named;
use processor::simulate;

use super::{check, dispatches, processes, run};

#[test]
#[named]
pub fn idle_gap() {
    let batch = processes(&[(1, 0, 2), (2, 5, 1)]);
    let simulation = simulate(batch.clone(), 3, true);

    check(&simulation, &batch, 3);
    assert_eq!(dispatches(&simulation), vec![(0, 1, 2), (5, 2, 1)]);

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &simulation.logs,
    );
}

#[test]
pub fn arrival_near_u32_max() {
    let late = u64::from(u32::MAX);
    let batch = processes(&[(1, 0, 2), (2, late, 3)]);
    let simulation = simulate(batch.clone(), 2, true);

    check(&simulation, &batch, 2);
    assert_eq!(
        dispatches(&simulation),
        vec![(0, 1, 2), (late, 2, 2), (late + 2, 2, 1)]
    );
    assert_eq!(
        simulation.report.to_string(),
        "Average waiting time: 0.00\nAverage response time: 0.00\n"
    );
}

#[test]
pub fn first_arrival_after_zero() {
    let batch = processes(&[(1, 3, 2), (2, 3, 1)]);
    let simulation = simulate(batch.clone(), 2, true);

    check(&simulation, &batch, 2);
    assert_eq!(dispatches(&simulation), vec![(3, 1, 2), (5, 2, 1)]);
    assert_eq!(
        simulation.report.to_string(),
        "Average waiting time: 1.00\nAverage response time: 1.00\n"
    );
}

#[test]
pub fn arrival_mid_slice_runs_before_preempted() {
    let batch = processes(&[(1, 0, 4), (2, 2, 2)]);
    let simulation = simulate(batch.clone(), 3, true);

    check(&simulation, &batch, 3);
    assert_eq!(dispatches(&simulation), vec![(0, 1, 3), (3, 2, 2), (5, 1, 1)]);
}

#[test]
pub fn arrival_at_slice_end_runs_before_preempted() {
    let batch = processes(&[(1, 0, 4), (2, 2, 2)]);
    let simulation = simulate(batch.clone(), 2, true);

    check(&simulation, &batch, 2);
    assert_eq!(dispatches(&simulation), vec![(0, 1, 2), (2, 2, 2), (4, 1, 2)]);
    assert_eq!(
        simulation.report.to_string(),
        "Average waiting time: 1.00\nAverage response time: 0.00\n"
    );
}

#[test]
pub fn ties_follow_input_order() {
    let batch = processes(&[(5, 0, 1), (3, 0, 1), (9, 0, 1)]);
    let simulation = simulate(batch.clone(), 1, true);

    check(&simulation, &batch, 1);
    assert_eq!(dispatches(&simulation), vec![(0, 5, 1), (1, 3, 1), (2, 9, 1)]);
}

#[test]
pub fn ties_in_the_middle_of_a_slice() {
    let batch = processes(&[(1, 0, 3), (7, 1, 1), (4, 1, 1)]);
    let simulation = simulate(batch.clone(), 3, true);

    check(&simulation, &batch, 3);
    assert_eq!(dispatches(&simulation), vec![(0, 1, 3), (3, 7, 1), (4, 4, 1)]);
}

#[test]
pub fn input_order_does_not_matter() {
    let triples = [(1, 0, 5), (2, 1, 3), (3, 2, 1), (4, 6, 2), (5, 12, 4)];
    let reference = simulate(processes(&triples), 2, true);
    check(&reference, &processes(&triples), 2);

    let mut reversed = triples;
    reversed.reverse();
    let mut rotated = triples;
    rotated.rotate_left(2);

    for permutation in [reversed, rotated] {
        let batch = processes(&permutation);
        let simulation = simulate(batch.clone(), 2, true);
        check(&simulation, &batch, 2);
        assert_eq!(dispatches(&simulation), dispatches(&reference));
        assert_eq!(simulation.report, reference.report);
    }
}
