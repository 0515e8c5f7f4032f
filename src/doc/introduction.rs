/*!
# Introductory Tutorial for Tiny-ASM

Tiny-ASM programs are plain text files. Each line holds zero or more
instructions; an instruction is a mnemonic followed by its operands, all
separated by whitespace. There are no registers. Every instruction works
directly on memory cells, written as a number in brackets.

Save the following as `hello.asm`.

```text
; print "Hi" and stop
APRINT 'H'
APRINT 'i'
APRINT '\n'
HALT
```

Run it with `tiny hello.asm` and you'll see `Hi` printed in green. The
green output is what the program printed. Errors and warnings go to the
terminal's error stream so they never mix with output.

Every program must end by executing `HALT`. Falling off the end of the
program is an error, as is an instruction which jumps to itself.

## Memory and literals

An operand in brackets is an ADDRESS; anything else is a LITERAL.
`MOV [0] 5` stores 5 in cell 0. `MOV [1] [0]` copies cell 0 into cell 1.
Cells hold unsigned words of 8 bits unless `TINY_WORD_SIZE` says
otherwise, so arithmetic wraps: 255 plus 1 is 0 and 0 minus 1 is 255.

```text
MOV [0] 250
ADD [0] 10
DPRINT [0]    ; prints 4
HALT
```

## Seeing what the assembler sees

Two more commands help when a program misbehaves.
`tiny pp FILE` prints the program after the preprocessor has finished,
with constants, labels, subroutine calls and character literals gone.
`tiny asm FILE` prints the assembled program.

```text
> tiny asm hello.asm
0x21 0x48 0x21 0x69 0x21 0x0A 0xFF
```

Stop a running program with CTRL-C.

## Environment

`TINY_WORD_SIZE`, `TINY_MEMORY_SIZE` and `TINY_RAND_MAX` change the machine.
`TINY_LOG` sets the log filter, for example `TINY_LOG=tiny=debug`.

*/
