/*!
# Error Messages

Errors show the file and line they came from followed by the original
line of source.

```text
UNKNOWN MNEMONIC IN hello.asm LINE 3; PRINT
    PRINT 'x'
```

A WARNING is reported and the program carries on. Everything else stops
assembly or execution. Once assembly fails nothing is run.

## Syntax

`SYNTAX ERROR` A malformed directive, character literal, constant
definition, or an instruction with operands it doesn't accept.

`INVALID ARGUMENT` An operand that isn't a number, or a bad value in a
`TINY_` environment variable.

## Names

`UNKNOWN MNEMONIC` Not an instruction.

`NO SUCH CONSTANT` A `$name` used before it was defined.

`NO SUCH LABEL` A `:name` with no matching `name:`.

`UNKNOWN SUBROUTINE` A `@call` of something never declared with `@start`.

`REDEFINITION` A label or subroutine declared twice.

`CONSTANT REDEFINED` A warning. The newer value is used.

## Resources

`OUT OF MEMORY` `[_]` asked for more cells than the machine has.

## Runtime

`MISSING HALT` The program ran off its end.

`INFINITE LOOP` An instruction jumped to itself.

`WRONG NUMBER OF ARGUMENTS` A `@call` whose argument count doesn't match
the subroutine.

`INVALID ADDRESS` A memory cell outside the machine.

`UNKNOWN OPCODE` An assembled program containing a byte that isn't an
instruction.

## Files

`FILE NOT FOUND` and `I/O ERROR` when reading source or imports.

*/
