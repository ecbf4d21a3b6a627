//! Behavioural tests for the form-validation crate.
//!
//! These scenarios drive the named registration and sign-in policies with
//! concrete form snapshots and check the resulting error mapping.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use form_validation::{Field, FormInput, ValidationPolicy, ValidationResult};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

/// Test world holding the policy, the form snapshot and the outcome.
#[derive(Default, ScenarioState)]
struct World {
    policy: Slot<ValidationPolicy>,
    input: Slot<FormInput>,
    result: Slot<ValidationResult>,
}

impl World {
    fn policy(&self) -> ValidationPolicy {
        self.policy.get().expect("policy should be chosen")
    }

    fn result(&self) -> ValidationResult {
        self.result.get().expect("form should be validated")
    }

    fn edit(&self, field: Field, value: &str) {
        let mut input = self.input.get().unwrap_or_default();
        input.set(field, value);
        self.input.set(input);
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

fn parse_field(raw: &str) -> Field {
    raw.parse().expect("step names a known field")
}

// ============================================================================
// Given steps
// ============================================================================

#[given("the registration policy")]
fn the_registration_policy(world: &World) {
    world.policy.set(ValidationPolicy::registration());
    world.input.set(FormInput::registration("", "", ""));
}

#[given("the sign-in policy")]
fn the_sign_in_policy(world: &World) {
    world.policy.set(ValidationPolicy::sign_in());
    world.input.set(FormInput::sign_in("", ""));
}

#[given("the name is {name}")]
fn the_name_is(world: &World, name: String) {
    world.edit(Field::Name, &name);
}

#[given("the name field is left blank")]
fn the_name_field_is_left_blank(world: &World) {
    world.edit(Field::Name, "");
}

#[given("the email is {email}")]
fn the_email_is(world: &World, email: String) {
    world.edit(Field::Email, &email);
}

#[given("the password is {password}")]
fn the_password_is(world: &World, password: String) {
    world.edit(Field::Password, &password);
}

// ============================================================================
// When steps
// ============================================================================

#[when("the form is validated")]
fn the_form_is_validated(world: &World) {
    let input = world.input.get().expect("form input should be set");
    world.result.set(world.policy().validate(&input));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the form is submittable")]
fn the_form_is_submittable(world: &World) {
    let result = world.result();
    assert!(result.is_submittable(), "unexpected errors: {result:?}");
}

#[then("the {field} field has the error {message}")]
fn the_field_has_the_error(world: &World, field: String, message: String) {
    let result = world.result();
    assert_eq!(result.get(parse_field(&field)), Some(message.as_str()));
}

#[then("the {field} field has no error")]
fn the_field_has_no_error(world: &World, field: String) {
    let result = world.result();
    assert!(!result.contains(parse_field(&field)), "{result:?}");
}

#[then("validating again gives the same result")]
fn validating_again_gives_the_same_result(world: &World) {
    let input = world.input.get().expect("form input should be set");
    let again = world.policy().validate(&input);
    assert_eq!(again, world.result());
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/form_validation.feature",
    name = "Valid registration has no errors"
)]
fn valid_registration_has_no_errors(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/form_validation.feature",
    name = "Every registration field can fail together"
)]
fn every_registration_field_can_fail_together(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/form_validation.feature",
    name = "Sign-in rejects a password without letters"
)]
fn sign_in_rejects_a_password_without_letters(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/form_validation.feature",
    name = "Sign-in accepts letters mixed with digits"
)]
fn sign_in_accepts_letters_mixed_with_digits(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/form_validation.feature",
    name = "Email without a dotted domain is rejected"
)]
fn email_without_a_dotted_domain_is_rejected(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/form_validation.feature",
    name = "Validation is repeatable"
)]
fn validation_is_repeatable(world: World) {
    let _ = world;
}
