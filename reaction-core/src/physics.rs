use nphysics2d::force_generator::DefaultForceGeneratorSet;
use nphysics2d::joint::DefaultJointConstraintSet;
use nphysics2d::material::{BasicMaterial, MaterialHandle};
use nphysics2d::ncollide2d::shape::{Cuboid, ShapeHandle};
use nphysics2d::object::{
    Body, BodyPartHandle, BodyStatus, ColliderDesc, DefaultBodyHandle, DefaultBodySet,
    DefaultColliderSet, RigidBodyDesc,
};
use nphysics2d::world::{DefaultGeometricalWorld, DefaultMechanicalWorld};
use nphysics2d::math::{Force, ForceType};

pub use nphysics2d::nalgebra::{Point2, Vector2};

pub type PhysicsPrecision = f32;

/// Nominal simulated time per frame. The loop is not wall-clock
/// synchronized: every frame advances exactly this much.
pub const TIMESTEP: PhysicsPrecision = 1.0 / 60.0;
/// Solver sub-steps per frame, for stable contact resolution.
pub const SUBSTEPS: u32 = 4;
/// Where input-spawned boxes appear.
pub const SPAWN_POINT: (PhysicsPrecision, PhysicsPrecision) = (0.0, 10.0);

const GROUND_POSITION: (PhysicsPrecision, PhysicsPrecision) = (0.0, -10.0);
const GROUND_HALF_EXTENTS: (PhysicsPrecision, PhysicsPrecision) = (50.0, 10.0);
const SHIP_START: (PhysicsPrecision, PhysicsPrecision) = (0.0, 4.0);

const BOX_HALF_EXTENT: PhysicsPrecision = 0.5;
const BOX_DENSITY: PhysicsPrecision = 1.0;
const BOX_FRICTION: PhysicsPrecision = 0.3;
const THRUST_FORCE: (PhysicsPrecision, PhysicsPrecision) = (0.0, 200.0);

/// Owns the rigid-body world plus the handles the sandbox cares about:
/// the static ground, the player-controlled ship, and every box spawned
/// by input, in insertion order.
pub struct Physics {
    mechanical_world: DefaultMechanicalWorld<PhysicsPrecision>,
    geometrical_world: DefaultGeometricalWorld<PhysicsPrecision>,

    bodies: DefaultBodySet<PhysicsPrecision>,
    colliders: DefaultColliderSet<PhysicsPrecision>,
    joint_constraints: DefaultJointConstraintSet<PhysicsPrecision>,
    force_generators: DefaultForceGeneratorSet<PhysicsPrecision>,

    ground: DefaultBodyHandle,
    ship: DefaultBodyHandle,
    spawned: Vec<DefaultBodyHandle>,
    elapsed: f64,
}

impl Physics {
    pub fn new(gravity: Vector2<PhysicsPrecision>) -> Self {
        let mechanical_world = DefaultMechanicalWorld::new(gravity);
        let geometrical_world = DefaultGeometricalWorld::new();

        let mut bodies = DefaultBodySet::new();
        let mut colliders = DefaultColliderSet::new();
        let joint_constraints = DefaultJointConstraintSet::new();
        let force_generators = DefaultForceGeneratorSet::new();

        // Static floor, a wide box below the origin
        let ground_body = RigidBodyDesc::new()
            .translation(Vector2::new(GROUND_POSITION.0, GROUND_POSITION.1))
            .status(BodyStatus::Static)
            .build();
        let ground = bodies.insert(ground_body);
        let ground_shape = ShapeHandle::new(Cuboid::new(Vector2::new(
            GROUND_HALF_EXTENTS.0,
            GROUND_HALF_EXTENTS.1,
        )));
        colliders.insert(ColliderDesc::new(ground_shape).build(BodyPartHandle(ground, 0)));

        let ship = Self::insert_box(
            &mut bodies,
            &mut colliders,
            Point2::new(SHIP_START.0, SHIP_START.1),
        );

        Self {
            mechanical_world,
            geometrical_world,
            bodies,
            colliders,
            joint_constraints,
            force_generators,

            ground,
            ship,
            spawned: Vec::new(),
            elapsed: 0.0,
        }
    }

    fn insert_box(
        bodies: &mut DefaultBodySet<PhysicsPrecision>,
        colliders: &mut DefaultColliderSet<PhysicsPrecision>,
        position: Point2<PhysicsPrecision>,
    ) -> DefaultBodyHandle {
        let body = RigidBodyDesc::new().translation(position.coords).build();
        let handle = bodies.insert(body);
        let shape = ShapeHandle::new(Cuboid::new(Vector2::repeat(BOX_HALF_EXTENT)));
        let collider = ColliderDesc::new(shape)
            .density(BOX_DENSITY)
            .material(MaterialHandle::new(BasicMaterial::new(0.0, BOX_FRICTION)))
            .build(BodyPartHandle(handle, 0));
        colliders.insert(collider);
        handle
    }

    /// Advances the world by exactly `dt` of simulated time, subdivided
    /// into `substeps` solver passes.
    pub fn step(&mut self, dt: PhysicsPrecision, substeps: u32) {
        self.mechanical_world.set_timestep(dt / substeps as PhysicsPrecision);
        for _ in 0..substeps {
            self.mechanical_world.step(
                &mut self.geometrical_world,
                &mut self.bodies,
                &mut self.colliders,
                &mut self.joint_constraints,
                &mut self.force_generators,
            );
        }
        self.elapsed += f64::from(dt);
    }

    /// Drops a 1x1 dynamic box into the world and records its handle.
    /// Nothing bounds the list; eviction goes through [`remove_box`].
    ///
    /// [`remove_box`]: Physics::remove_box
    pub fn spawn_box(&mut self, position: Point2<PhysicsPrecision>) -> DefaultBodyHandle {
        let handle = Self::insert_box(&mut self.bodies, &mut self.colliders, position);
        self.spawned.push(handle);
        handle
    }

    /// Removes a spawned box from the world and the bookkeeping list.
    /// The frame loop never calls this yet; it exists so a future cap on
    /// the spawned list has something to evict through.
    pub fn remove_box(&mut self, handle: DefaultBodyHandle) {
        if let Some(idx) = self.spawned.iter().position(|h| *h == handle) {
            self.spawned.remove(idx);
            let _ = self.bodies.remove(handle);
        }
    }

    /// Applies the fixed upward thrust to the ship. The engine clears
    /// external forces after each step, so this acts on the next step
    /// only and must be re-applied for sustained propulsion.
    pub fn apply_thrust(&mut self) {
        if let Some(ship) = self.bodies.rigid_body_mut(self.ship) {
            ship.apply_force(
                0,
                &Force::linear(Vector2::new(THRUST_FORCE.0, THRUST_FORCE.1)),
                ForceType::Force,
                true,
            );
        }
    }

    pub fn ship(&self) -> DefaultBodyHandle {
        self.ship
    }

    pub fn ground(&self) -> DefaultBodyHandle {
        self.ground
    }

    pub fn spawned(&self) -> &[DefaultBodyHandle] {
        &self.spawned
    }

    /// Total simulated time in seconds, advanced by `dt` per [`step`]
    /// call regardless of wall-clock time.
    ///
    /// [`step`]: Physics::step
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn ship_pose(&self) -> (Point2<PhysicsPrecision>, PhysicsPrecision) {
        self.body_pose(self.ship).expect("ship body missing from world")
    }

    /// Position and rotation (radians) of a body, if it is still alive.
    pub fn body_pose(
        &self,
        handle: DefaultBodyHandle,
    ) -> Option<(Point2<PhysicsPrecision>, PhysicsPrecision)> {
        let body = self.bodies.rigid_body(handle)?;
        let pos = body.position();
        Some((Point2::from(pos.translation.vector), pos.rotation.angle()))
    }
}
