use crate::builtins::{builtin, builtins};
use crate::types::{ShaderType, all_scalars};

#[test]
fn casts_are_registered_in_order() {
    let names: Vec<_> = builtins().map(|(name, _)| name).collect();
    assert_eq!(names, ["bool", "i32", "u32", "f32", "f16"]);
}

#[test]
fn every_cast_takes_any_scalar_and_returns_its_own_kind() {
    for (name, sig) in builtins() {
        assert_eq!(sig.arity(), 1, "{name}");
        assert_eq!(sig.params[0], all_scalars(), "{name}");
        assert_eq!(sig.result.to_string(), name);
    }
}

#[test]
fn lookup() {
    assert_eq!(builtin("f32").map(|s| &s.result), Some(&ShaderType::F32));
    assert!(builtin("notARealBuiltin").is_none());
    assert!(builtin("U32").is_none());
}

#[test]
fn registry_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| builtin("u32").map(|s| s as *const _ as usize)))
        .collect();
    let addrs: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addrs.iter().all(|a| a.is_some() && *a == addrs[0]));
}
