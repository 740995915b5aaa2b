use gcode_model::{Options, parse_line, parse_str};

fn main() {
    println!("=== Tokenizer ===");

    let test_lines = [
        "G1 X10 Y20.5 Z0.2 E1.25 ; linear move",
        ";TYPE:WALL-OUTER",
        ";LAYER:3",
        "G2 X5 Y5 I2.5 J0 (arc)",
        "G92 E0",
        "G1 X (unterminated",
    ];

    for line in test_lines {
        println!("\nInput: '{}'", line);
        println!("Parsed: {:?}", parse_line(line));
    }

    println!("\n=== Model ===");

    let program = "\
G21
G90
G92 E0
G1 Z0.2 F9000
G1 X20 Y0 E1
G3 X0 Y20 I-20 J0 E3
G1 E2.2
G1 E3
G1 Z0.4
G1 X20 Y20 E4
";

    match parse_str(program, Options::default()) {
        Ok(output) => {
            println!("{}", output.model);
            for layer in &output.model.layers {
                println!("  {}", layer);
            }
            for diagnostic in &output.diagnostics {
                println!("  warning: {}", diagnostic);
            }
        }
        Err(e) => eprintln!("Parse error: {}", e),
    }
}
