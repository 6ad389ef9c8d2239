fn main() {
    raycast_arena::game::run();
}
