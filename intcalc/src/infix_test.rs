use crate::error::EvalErr;
use crate::infix::{shunting, Evaluate, InfixEvaluator};
use crate::rpn::Emit;
use crate::evaluate_infix;

#[test]
fn test_eval1() {
    assert_eq!(evaluate_infix("(4+2)*3"), Ok(18));
    assert_eq!(evaluate_infix("( 4 + 2 ) * 3"), Ok(18));
}

#[test]
fn test_eval2() {
    assert_eq!(evaluate_infix("5+(3*7)"), Ok(26));
    assert_eq!(evaluate_infix("50+(3*7)"), Ok(71));
}

#[test]
fn precedence_without_parens() {
    assert_eq!(evaluate_infix("3+4*2"), Ok(11));
    assert_eq!(evaluate_infix("3*4+2"), Ok(14));
    assert_eq!(evaluate_infix("2+10%4*3"), Ok(8));
}

#[test]
fn left_associative() {
    assert_eq!(evaluate_infix("10-4-3"), Ok(3));
    assert_eq!(evaluate_infix("100/10/5"), Ok(2));
    assert_eq!(evaluate_infix("2*7%4"), Ok(2));
    assert_eq!(evaluate_infix("10-(4-3)"), Ok(9));
}

#[test]
fn nesting_and_spacing() {
    assert_eq!(evaluate_infix("((2))"), Ok(2));
    assert_eq!(evaluate_infix(" ( (1+2) * (3+4) ) % 5 "), Ok(1));
    assert_eq!(evaluate_infix("\t12345\n"), Ok(12345));
    assert_eq!(evaluate_infix("007+1"), Ok(8));
}

#[test]
fn truncating_division() {
    assert_eq!(evaluate_infix("7/2"), Ok(3));
    assert_eq!(evaluate_infix("(1-8)/2"), Ok(-3));
    assert_eq!(evaluate_infix("(1-8)%2"), Ok(-1));
}

#[test]
fn arithmetic_faults() {
    assert_eq!(evaluate_infix("5/(2-2)"), Err(EvalErr::DivisionByZero));
    assert_eq!(evaluate_infix("5%0"), Err(EvalErr::ModuloByZero));
    assert_eq!(
        evaluate_infix("9223372036854775807+1"),
        Err(EvalErr::Overflow { op: '+' }));
    assert_eq!(
        evaluate_infix("99999999999999999999"),
        Err(EvalErr::LiteralOutOfRange("99999999999999999999".to_string())));
}

#[test]
fn bad_parens() {
    assert_eq!(evaluate_infix("(3+4"), Err(EvalErr::UnmatchedOpening { pos: 0 }));
    assert_eq!(evaluate_infix("3+4)"), Err(EvalErr::UnmatchedClosing { pos: 3 }));
    assert_eq!(evaluate_infix(")3+4("), Err(EvalErr::UnmatchedClosing { pos: 0 }));
}

#[test]
fn unbalanced_without_precheck() {
    // the scan has its own paren checks when validate_parentheses is skipped
    assert_eq!(
        shunting("1)", Evaluate::default()),
        Err(EvalErr::MismatchedParentheses { pos: 1 }));
    assert_eq!(
        shunting("(1", Evaluate::default()),
        Err(EvalErr::MismatchedParentheses { pos: 0 }));
    assert_eq!(
        shunting("(1+2)*3)", Evaluate::default()),
        Err(EvalErr::MismatchedParentheses { pos: 7 }));
    assert_eq!(
        shunting("2*((1+2)", Evaluate::default()),
        Err(EvalErr::MismatchedParentheses { pos: 2 }));
    assert_eq!(
        shunting("1)", Emit::default()),
        Err(EvalErr::MismatchedParentheses { pos: 1 }));
    assert_eq!(
        shunting("(1", Emit::default()),
        Err(EvalErr::MismatchedParentheses { pos: 0 }));
}

#[test]
fn bad_characters() {
    assert_eq!(evaluate_infix("3+x"), Err(EvalErr::InvalidCharacter { ch: 'x', pos: 2 }));
    assert_eq!(evaluate_infix("2^3"), Err(EvalErr::InvalidCharacter { ch: '^', pos: 1 }));
    assert_eq!(evaluate_infix("1.5*2"), Err(EvalErr::InvalidCharacter { ch: '.', pos: 1 }));
}

#[test]
fn malformed() {
    assert_eq!(evaluate_infix(""), Err(EvalErr::InvalidExpression { values: 0 }));
    assert_eq!(evaluate_infix("()"), Err(EvalErr::InvalidExpression { values: 0 }));
    assert_eq!(evaluate_infix("3 4"), Err(EvalErr::InvalidExpression { values: 2 }));
    assert_eq!(evaluate_infix("(1)(2)"), Err(EvalErr::InvalidExpression { values: 2 }));
    assert_eq!(evaluate_infix("3+"), Err(EvalErr::InsufficientOperands { op: '+', pos: 1 }));
    assert_eq!(evaluate_infix("-3"), Err(EvalErr::InsufficientOperands { op: '-', pos: 0 }));
    assert_eq!(evaluate_infix("3*+4"), Err(EvalErr::InsufficientOperands { op: '*', pos: 1 }));
    assert_eq!(evaluate_infix("(+)"), Err(EvalErr::InsufficientOperands { op: '+', pos: 1 }));
}

#[test]
fn strict_mode() {
    let strict = InfixEvaluator::strict();
    assert_eq!(strict.eval("3+4*2"), Err(EvalErr::MissingParentheses));
    assert_eq!(strict.eval("(3+4"), Err(EvalErr::MissingParentheses));
    assert_eq!(strict.eval("(4+2)*3"), Ok(18));
    assert_eq!(strict.eval(")1+2("), Err(EvalErr::UnmatchedClosing { pos: 0 }));
    assert_eq!(InfixEvaluator::default(), InfixEvaluator::new());
    assert_eq!(InfixEvaluator::new().eval("3+4*2"), Ok(11));
}

#[test]
fn idempotent() {
    let expr = "(17 - 5) * 3 % 7 + 100 / 9";
    let first = evaluate_infix(expr);
    assert_eq!(first, Ok(12 * 3 % 7 + 100 / 9));
    for _ in 0..3 {
        assert_eq!(evaluate_infix(expr), first);
    }
    let evaluator = InfixEvaluator::new();
    assert_eq!(evaluator.eval(expr), evaluator.eval(expr));
}
