use bevy::prelude::*;

use crate::components::{BoostTransition, Player, SpeedBoost, Submarine};
use crate::events::{BoostEnded, BoostReady, BoostStarted};
use crate::systems::movement::SubmarineInputBuffer;

/// Consumes a buffered Boost press and advances boost/cooldown timers.
///
/// A press during Active or Cooldown is dropped rather than queued.
pub fn update_speed_boost(
    time: Res<Time>,
    mut input_buffer: ResMut<SubmarineInputBuffer>,
    mut query: Query<(Entity, &mut SpeedBoost), (With<Submarine>, With<Player>)>,
    mut started: EventWriter<BoostStarted>,
    mut ended: EventWriter<BoostEnded>,
    mut ready: EventWriter<BoostReady>,
) {
    let requested = std::mem::take(&mut input_buffer.boost_requested);

    for (entity, mut boost) in &mut query {
        match boost.tick(time.delta()) {
            Some(BoostTransition::Ended) => {
                info!("Boost ended, cooling down for {:.1}s", boost.cooldown);
                ended.send(BoostEnded { entity });
            }
            Some(BoostTransition::Ready) => {
                info!("Boost ready");
                ready.send(BoostReady { entity });
            }
            None => {}
        }

        if requested {
            if boost.try_activate() {
                info!("Boost started for {:.1}s", boost.duration);
                started.send(BoostStarted { entity });
            } else {
                debug!("Boost unavailable ({})", boost.label());
            }
        }
    }
}
