/*!
# Instructions

In this table `[a]` is a memory cell written by the instruction. Any
other operand may be written as a literal or as an address; an address
is read before use. `x` is the jump target.

| Mnemonic | Operands | Effect |
|----------|----------|--------|
| `AND`    | `[a] b`   | `[a] = [a] & b` |
| `OR`     | `[a] b`   | `[a] = [a] \| b` |
| `XOR`    | `[a] b`   | `[a] = [a] ^ b` |
| `NOT`    | `[a]`     | `[a] = ![a]` |
| `MOV`    | `[a] b`   | `[a] = b` |
| `RANDOM` | `[a]`     | `[a] = random number from 0 to RAND_MAX` |
| `ADD`    | `[a] b`   | `[a] = [a] + b` |
| `SUB`    | `[a] b`   | `[a] = [a] - b` |
| `JMP`    | `x`       | jump to `x` |
| `JZ`     | `x a`     | jump to `x` if `a` is zero |
| `JEQ`    | `x a b`   | jump to `x` if `a == b` |
| `JLS`    | `x a b`   | jump to `x` if `a < b` |
| `JGT`    | `x a b`   | jump to `x` if `a > b` |
| `HALT`   |           | stop |
| `APRINT` | `a`       | print `a` as a character |
| `DPRINT` | `a`       | print `a` in decimal |
| `AREAD`  | `[a]`     | read one character into `[a]`, 0 at end of input |

For the comparison jumps the first compared value must be an address.
`JEQ :x [0] 5` is fine, `JEQ :x 5 [0]` is a syntax error.

## Opcodes

Each way of writing the operands has its own opcode.

```text
0x00 AND [a] [b]      0x01 AND [a] b
0x02 OR  [a] [b]      0x03 OR  [a] b
0x04 XOR [a] [b]      0x05 XOR [a] b
0x06 NOT [a]
0x07 MOV [a] [b]      0x08 MOV [a] b
0x09 RANDOM [a]
0x0A ADD [a] [b]      0x0B ADD [a] b
0x0C SUB [a] [b]      0x0D SUB [a] b
0x0E JMP [x]          0x0F JMP x
0x10 JZ [x] [a]       0x11 JZ [x] a
0x12 JZ x [a]         0x13 JZ x a
0x14 JEQ [x] [a] [b]  0x15 JEQ x [a] [b]
0x16 JEQ [x] [a] b    0x17 JEQ x [a] b
0x18 JLS [x] [a] [b]  0x19 JLS x [a] [b]
0x1A JLS [x] [a] b    0x1B JLS x [a] b
0x1C JGT [x] [a] [b]  0x1D JGT x [a] [b]
0x1E JGT [x] [a] b    0x1F JGT x [a] b
0x20 APRINT [a]       0x21 APRINT a
0x22 DPRINT [a]       0x23 DPRINT a
0x24 AREAD [a]
0xFF HALT
```

## Jumping to yourself

A jump whose target is the jumping instruction itself can never make
progress and stops the machine with an INFINITE LOOP error. This is the
only loop the machine detects. Any other program that never halts runs
until interrupted.

*/
