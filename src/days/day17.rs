use itertools::Itertools;
use regex::Regex;

#[derive(Debug)]
struct Computer {regs: [u64; 3], ip: usize, out: Vec<u8>}

impl Computer {
    fn new(regs: [u64; 3]) -> Computer {Computer {regs, ip: 0, out: vec![]}}

    fn combo(&self, operand: u8) -> u64 {
        match operand {
            0 ..= 3 => operand as u64,
            4 ..= 6 => self.regs[operand as usize - 4],
            _ => panic!("reserved combo operand {}", operand)
        }
    }

    /// Executes one instruction, false once the instruction pointer runs off the program.
    fn step(&mut self, program: &[u8]) -> bool {
        let (Some(&opcode), Some(&operand)) = (program.get(self.ip), program.get(self.ip + 1)) else {
            return false
        };
        let [a, b, c] = self.regs;
        let shifted = |by: u64| if by >= 64 {0} else {a >> by};
        match opcode {
            0 => self.regs[0] = shifted(self.combo(operand)),
            1 => self.regs[1] = b ^ operand as u64,
            2 => self.regs[1] = self.combo(operand) % 8,
            3 => if a != 0 {
                self.ip = operand as usize;
                return true;
            },
            4 => self.regs[1] = b ^ c,
            5 => self.out.push((self.combo(operand) % 8) as u8),
            6 => self.regs[1] = shifted(self.combo(operand)),
            7 => self.regs[2] = shifted(self.combo(operand)),
            _ => panic!("invalid opcode {}", opcode)
        }
        self.ip += 2;
        true
    }

    fn run(&mut self, program: &[u8]) -> &[u8] {
        while self.step(program) {}
        &self.out
    }
}

fn parse(input: &str) -> ([u64; 3], Vec<u8>) {
    let numbers = Regex::new(r"\d+").expect("number pattern")
        .find_iter(input)
        .map(|m| m.as_str().parse::<u64>().unwrap())
        .collect::<Vec<_>>();
    let [a, b, c, program @ ..] = &numbers[..] else {panic!("expected three registers and a program")};
    let program = program.iter().map(|&x| u8::try_from(x).ok().filter(|&x| x < 8).expect("3-bit program")).collect();
    ([*a, *b, *c], program)
}

/// Each pass of the program consumes the low three bits of A and prints one number, so the
/// output is built back to front: fix three more bits of A for every trailing output matched.
fn quine_seed(regs: [u64; 3], program: &[u8]) -> Option<u64> {
    fn search(regs: [u64; 3], program: &[u8], at: usize, high_bits: u64) -> Option<u64> {
        (0 .. 8).map(|low| high_bits << 3 | low).find_map(|a| {
            let mut computer = Computer::new([a, regs[1], regs[2]]);
            if computer.run(program) != &program[at ..] {return None}
            if at == 0 {Some(a)} else {search(regs, program, at - 1, a)}
        })
    }
    search(regs, program, program.len().checked_sub(1)?, 0)
}

pub fn solve(part: u8, input: &str) -> String {
    let (regs, program) = parse(input);
    if part == 1 {
        Computer::new(regs).run(&program).iter().join(",")
    } else {
        quine_seed(regs, &program).map_or_else(|| "none".to_string(), |a| a.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {
        let input = "Register A: 729\nRegister B: 0\nRegister C: 0\n\nProgram: 0,1,5,4,3,0\n";
        assert_eq!(solve(1, input), "4,6,3,5,6,3,5,2,1,0");
        let input = "Register A: 2024\nRegister B: 0\nRegister C: 0\n\nProgram: 0,3,5,4,3,0\n";
        assert_eq!(solve(2, input), "117440");
        assert_eq!(Computer::new([117440, 0, 0]).run(&[0, 3, 5, 4, 3, 0]), [0, 3, 5, 4, 3, 0]);
    }

    #[test]
    fn instructions() {
        let mut computer = Computer::new([0, 0, 9]);
        computer.run(&[2, 6]);
        assert_eq!(computer.regs[1], 1);

        assert_eq!(Computer::new([10, 0, 0]).run(&[5, 0, 5, 1, 5, 4]), [0, 1, 2]);

        let mut computer = Computer::new([2024, 0, 0]);
        assert_eq!(computer.run(&[0, 1, 5, 4, 3, 0]), [4, 2, 5, 6, 7, 7, 7, 7, 3, 1, 0]);
        assert_eq!(computer.regs[0], 0);

        let mut computer = Computer::new([0, 29, 0]);
        computer.run(&[1, 7]);
        assert_eq!(computer.regs[1], 26);

        let mut computer = Computer::new([0, 2024, 43690]);
        computer.run(&[4, 0]);
        assert_eq!(computer.regs[1], 44354);
    }
}
