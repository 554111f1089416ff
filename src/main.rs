fn main() {
    turret_minigame::game::run();
}
