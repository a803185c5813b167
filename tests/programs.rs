//! Whole-program runs: real brainfuck sources through the interpreter.
use bfvm::vm::*;

const HELLO_WORLD: &str =
    "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";

#[test]
fn test_hello_world() {
    let code = Program::from(HELLO_WORLD);

    let device = Interpreter::new(TestingDevice::default())
        .run(&code)
        .unwrap();

    assert_eq!(device.output_str(), "Hello World!\n");
}

#[test]
fn test_comment_bytes_are_ignored() {
    // Everything outside the eight opcodes is a comment, including
    // newlines and prose interleaved with the code.
    let code = Program::from(
        "this program adds two and three\n\
         ++ move right > +++\n\
         drain the right cell into the left one [<+>-]\n\
         < emit the sum .",
    );

    let device = Interpreter::new(TestingDevice::default())
        .run(&code)
        .unwrap();

    assert_eq!(device.output_vals(), &[5]);
}

#[test]
fn test_echo_with_transform() {
    // Read two bytes and emit each incremented by one.
    let code = Program::from(",+.,+.");

    let device = Interpreter::new(TestingDevice::new("HA"))
        .run(&code)
        .unwrap();

    assert_eq!(device.output_str(), "IB");
}

#[test]
fn test_output_is_raw_bytes() {
    // Output bytes need not be printable text.
    let code = Program::from("+.");

    let device = Interpreter::new(TestingDevice::default())
        .run(&code)
        .unwrap();

    assert_eq!(device.output_vals(), &[1]);
}
