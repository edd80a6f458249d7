#![allow(clippy::unwrap_used, clippy::expect_used)]

use autcmd_core::errors::{AutCmdError, ExError, ExErrorKind};
use autcmd_core::{
    serialize_command, serialize_command_with_options, Command, Direction, Encoding, Operation,
    Options, Order,
};

fn expected_len(cmd: &Command) -> usize {
    2 + 1 + if cmd.options.is_some() { 2 } else { 0 } + cmd.operands.len()
}

#[test]
fn test_simulation_two_operands_fa() {
    let cmd = Command::new(Encoding::ExplicitFa, Operation::Simulation, ["a.fa", "b.fa"])
        .with_options(Direction::Forward);

    let tokens = serialize_command(&cmd).unwrap();

    assert_eq!(tokens, ["-r", "EFA", "SIM", "-o", "dir=FWD", "a.fa", "b.fa"]);
}

#[test]
fn test_scenario_a_fa_backward_simulation() {
    let cmd = Command::new(Encoding::ExplicitFa, Operation::Simulation, ["x"])
        .with_options(Direction::Backward);

    assert_eq!(
        serialize_command(&cmd).unwrap(),
        ["-r", "EFA", "SIM", "-o", "dir=BWD", "x"]
    );
}

#[test]
fn test_scenario_b_non_fa_backward_simulation_uses_default_table() {
    let fa = Command::new(Encoding::ExplicitFa, Operation::Simulation, ["x"])
        .with_options(Direction::Backward);
    let tree = Command::new(Encoding::Explicit, Operation::Simulation, ["x"])
        .with_options(Direction::Backward);

    let fa_tokens = serialize_command(&fa).unwrap();
    let tree_tokens = serialize_command(&tree).unwrap();

    assert_eq!(tree_tokens, ["-r", "EXPL", "SIM", "-o", "dir=DOWN", "x"]);
    assert_eq!(fa_tokens.len(), tree_tokens.len());
    assert!(tree_tokens[4].starts_with("dir="));
    assert_ne!(fa_tokens[4], tree_tokens[4]);
}

#[test]
fn test_scenario_c_equivalence_lexicographic() {
    for encoding in Encoding::ALL {
        let cmd = Command::new(encoding, Operation::Equivalence, ["a", "b"])
            .with_options(Order::Lexicographic);

        let tokens = serialize_command(&cmd).unwrap();

        assert_eq!(tokens[0], "-r");
        assert_eq!(tokens[1], encoding.to_string());
        assert_eq!(&tokens[2..], ["EQUIV", "-o", "order=LEX", "a", "b"]);
    }
}

#[test]
fn test_scenario_d_no_options_no_operands() {
    let cmd = Command::new(Encoding::BddTopDown, Operation::Witness, Vec::<String>::new());

    let tokens = serialize_command(&cmd).unwrap();

    assert_eq!(tokens, ["-r", "BDD_TD", "WITNESS"]);
    assert!(!tokens.iter().any(|t| t == "-o"));
}

#[test]
fn test_missing_options_for_equivalence() {
    let cmd = Command::new(Encoding::Explicit, Operation::Equivalence, ["a", "b"]);

    let err = serialize_command(&cmd).unwrap_err();

    assert_eq!(
        err,
        AutCmdError::MissingOptions {
            operation: "equivalence".to_string(),
            expected: "order".to_string(),
        }
    );
    let ex_err: ExError = err.into();
    assert_eq!(ex_err.code(), "ERR_MISSING_OPTIONS");
    assert_eq!(ex_err.operation(), Some("equivalence"));
}

#[test]
fn test_missing_options_for_every_option_taking_operation() {
    for operation in Operation::ALL.into_iter().filter(|o| o.takes_options()) {
        let cmd = Command::new(Encoding::Explicit, operation, ["a"]);
        let err = serialize_command(&cmd).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::MissingOptions, "{operation:?}");
    }
}

#[test]
fn test_wrong_options_shape_is_rejected() {
    let cmd = Command::new(Encoding::ExplicitFa, Operation::Simulation, ["a"])
        .with_options(Order::DepthFirst);

    let err = serialize_command(&cmd).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidOptionsShape);
}

#[test]
fn test_options_on_optionless_operation_are_rejected() {
    let cmd = Command::new(Encoding::Explicit, Operation::Union, ["a", "b"])
        .with_options(Direction::Forward);

    let err = serialize_command(&cmd).unwrap_err();

    assert!(matches!(
        err,
        AutCmdError::InvalidOptionsShape { ref expected, ref found, .. }
            if expected == "no" && found == "direction"
    ));
}

#[test]
fn test_inclusion_reads_order_under_dir_prefix() {
    let cmd = Command::new(Encoding::BddBottomUp, Operation::Inclusion, ["small", "big"])
        .with_options(Order::BreadthFirst);

    assert_eq!(
        serialize_command(&cmd).unwrap(),
        ["-r", "BDD_BU", "INCL", "-o", "dir=BREADTH", "small", "big"]
    );

    let with_direction = Command::new(Encoding::BddBottomUp, Operation::Inclusion, ["a", "b"])
        .with_options(Direction::Forward);
    assert_eq!(
        serialize_command(&with_direction).unwrap_err().kind(),
        ExErrorKind::InvalidOptionsShape
    );
}

#[test]
fn test_reduction_ignores_fa_table() {
    let cmd = Command::new(Encoding::ExplicitFa, Operation::Reduction, ["a.fa"])
        .with_options(Direction::Forward);

    assert_eq!(
        serialize_command(&cmd).unwrap(),
        ["-r", "EFA", "RED", "-o", "dir=UP", "a.fa"]
    );
}

#[test]
fn test_length_invariant_per_operation() {
    for operation in Operation::ALL {
        let mut cmd = Command::new(Encoding::Explicit, operation, ["one", "two", "three"]);
        cmd.options = match operation.options_kind() {
            Some(autcmd_core::OptionsKind::Direction) => Some(Options::Direction(Direction::Forward)),
            Some(autcmd_core::OptionsKind::Order) => Some(Options::Order(Order::DepthFirst)),
            None => None,
        };

        let tokens = serialize_command(&cmd).unwrap();

        assert_eq!(tokens.len(), expected_len(&cmd), "{operation:?}");
        assert_eq!(&tokens[tokens.len() - 3..], ["one", "two", "three"]);
    }
}

#[test]
fn test_operands_pass_through_verbatim() {
    let operands = ["with space.fa", "-o", "", "dir=FWD", "ünïcode"];
    let cmd = Command::new(Encoding::Explicit, Operation::Load, operands);

    let tokens = serialize_command(&cmd).unwrap();

    assert_eq!(&tokens[3..], operands);
}

#[test]
fn test_serialize_twice_is_identical() {
    let cmd = Command::new(Encoding::ExplicitFa, Operation::Simulation, ["a", "b"])
        .with_options(Direction::Backward);

    assert_eq!(serialize_command(&cmd).unwrap(), serialize_command(&cmd).unwrap());
}

#[test]
fn test_pair_entry_point_matches_tail_of_full_command() {
    let opts = Options::Order(Order::Lexicographic);
    let cmd = Command::new(Encoding::BddTopDown, Operation::Equivalence, ["lhs", "rhs"])
        .with_options(opts);

    let full = serialize_command(&cmd).unwrap();
    let pair =
        serialize_command_with_options(Operation::Equivalence, Some(&opts), "lhs", "rhs").unwrap();

    assert_eq!(&full[2..], pair.as_slice());
}

#[test]
fn test_pair_entry_point_missing_options() {
    let err = serialize_command_with_options(Operation::Reduction, None, "a", "b").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::MissingOptions);
}
