fn main() {
    tiny::term::main();
}
