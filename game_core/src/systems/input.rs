use hecs::World;

use crate::{HumanControlled, InputState, Paddle, PaddleIntent};

/// Record the keyboard direction as the human paddle's intent
pub fn ingest_input(world: &mut World, input: &InputState) {
    for (_entity, (intent, _)) in world.query_mut::<(&mut PaddleIntent, &HumanControlled)>() {
        intent.dir = input.paddle_dir.signum();
    }
}

/// Move the human paddle. A pointer position wins over keys.
pub fn drive_human_paddles(world: &mut World, input: &InputState) {
    for (_entity, (paddle, intent, _)) in
        world.query_mut::<(&mut Paddle, &PaddleIntent, &HumanControlled)>()
    {
        if let Some(pointer_y) = input.pointer_y {
            paddle.update_from_pointer(pointer_y);
        } else {
            match intent.dir {
                -1 => paddle.move_up(),
                1 => paddle.move_down(),
                _ => {}
            }
        }
    }
}
