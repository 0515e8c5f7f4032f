/*!
# The Preprocessor

Before assembly, source passes through six stages, always in this order.

1. Imports
2. Comments
3. Subroutines
4. Constants
5. Labels
6. Character literals

## Imports

`#import <path>` is replaced by the lines of that file. A file is only
ever imported once, so two files may safely import each other.

```text
#import <lib/math/divide.asm>
```

## Comments

Everything after `;` is ignored. Lines left empty disappear.

## Subroutines

A subroutine is declared with its name and number of arguments.
Arguments arrive in the constants `$arg0`, `$arg1` and so on. Store the
result in `$return` before `@end()`.

```text
$x = [_]
MOV $x 21
@call(double, $x)
DPRINT $return
HALT

@start(double, 1)
MOV $return $arg0
ADD $return $arg0
@end()
```

Execution walks straight into a subroutine body just like any other
code, so declare subroutines after `HALT` or import them at the end.

Calling a subroutine that doesn't exist, or with the wrong number of
arguments, is an error. So is declaring two subroutines with the same
name. Subroutines share their argument cells, so they can't call
themselves.

## Constants

`$name = value` defines a constant, and later uses of `$name` are
replaced by the value. Defining a constant again gives a warning and the
new value wins. The value `[_]` means "the next unused memory cell".

```text
$count = [_]
$limit = 10
MOV $count $limit
```

## Labels

`name:` marks a position and `:name` refers to it. Labels may be used
before they are defined.

```text
MOV [0] 0
loop:
DPRINT [0]
ADD [0] 1
JLS :loop [0] 3
HALT
```

## Character literals

`'A'` becomes 65. The escapes `'\n'`, `'\t'`, `'\r'`, `'\0'`, `'\a'`,
`'\b'`, `'\f'`, `'\v'`, `'\\'`, `'\''` and `'\"'` are understood.
`' '` is a space.

*/
