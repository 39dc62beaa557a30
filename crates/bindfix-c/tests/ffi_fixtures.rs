// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

// Drive the fixtures through the C ABI the way a foreign caller would:
// create, mutate through borrowed pointers, copy strings out, free.

use bindfix_c::*;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

unsafe fn config_name(config: *const BindfixConfig) -> String {
    let mut len = 0usize;
    assert_eq!(
        bindfix_config_name(config, ptr::null_mut(), 0, &mut len),
        BindfixError::BindfixBufferTooSmall
    );
    let mut buf = vec![0 as c_char; len + 1];
    assert_eq!(
        bindfix_config_name(config, buf.as_mut_ptr(), buf.len(), &mut len),
        BindfixError::BindfixOk
    );
    CStr::from_ptr(buf.as_ptr()).to_string_lossy().into_owned()
}

#[test]
fn test_config_roundtrip_through_handles() {
    unsafe {
        let config = bindfix_config_new();
        assert!(!config.is_null());
        assert_eq!(bindfix_config_id(config), 42);
        assert_eq!(bindfix_config_value(config), 56.0);
        assert_eq!(config_name(config), "test");

        let name = CString::new("renamed").expect("cstring");
        assert_eq!(bindfix_config_set_name(config, name.as_ptr()), BindfixError::BindfixOk);
        assert_eq!(bindfix_config_set_id(config, 7), BindfixError::BindfixOk);

        let copy = bindfix_config_clone(config);
        assert_eq!(bindfix_config_set_id(config, 8), BindfixError::BindfixOk);
        assert_eq!(bindfix_config_id(copy), 7);
        assert_eq!(config_name(copy), "renamed");

        bindfix_config_free(copy);
        bindfix_config_free(config);
    }
}

#[test]
fn test_null_handles_rejected() {
    unsafe {
        assert_eq!(bindfix_config_id(ptr::null()), 0);
        assert_eq!(
            bindfix_config_set_id(ptr::null_mut(), 1),
            BindfixError::BindfixInvalidArgument
        );
        assert!(bindfix_config_clone(ptr::null()).is_null());
        assert!(bindfix_school_other(ptr::null_mut()).is_null());
        assert_eq!(
            bindfix_logging_init_with_filter(ptr::null()),
            BindfixError::BindfixInvalidArgument
        );
        bindfix_config_free(ptr::null_mut());
    }
}

#[test]
fn test_manager_config_mutation_visible() {
    unsafe {
        let manager = bindfix_manager_new();
        let config = bindfix_manager_config_mut(manager);
        assert_eq!(bindfix_config_set_value(config, 1.5), BindfixError::BindfixOk);
        assert_eq!(bindfix_config_value(bindfix_manager_config(manager)), 1.5);
        bindfix_manager_free(manager);
    }
}

#[test]
fn test_school_other_is_distinct_and_deep_cloned() {
    unsafe {
        let school = bindfix_school_new();
        let teacher = bindfix_school_teacher(school);
        let other = bindfix_school_other(school);
        assert_ne!(teacher, other);
        assert_eq!(
            bindfix_config_id(bindfix_manager_config(other)),
            42,
            "other manager starts with a default config"
        );

        let copy = bindfix_school_clone(school);
        let copy_other = bindfix_school_other(copy);
        assert_ne!(copy_other, other);

        bindfix_config_set_id(bindfix_manager_config_mut(other), 5);
        assert_eq!(bindfix_config_id(bindfix_manager_config(copy_other)), 42);

        bindfix_school_free(copy);
        bindfix_school_free(school);
    }
}

#[test]
fn test_methods_surface() {
    unsafe {
        let methods = bindfix_methods_new();
        assert_eq!(bindfix_methods_get_id(methods), 0);
        assert_eq!(bindfix_methods_set_id(methods, 11), BindfixError::BindfixOk);
        assert_eq!(bindfix_methods_get_id(methods), 11);

        let mut out = -1;
        assert_eq!(
            bindfix_methods_optional_id(methods, true, &mut out),
            BindfixError::BindfixOk
        );
        assert_eq!(out, 11);
        out = -1;
        assert_eq!(
            bindfix_methods_optional_id(methods, false, &mut out),
            BindfixError::BindfixNotFound
        );
        assert_eq!(out, -1);

        // By reference: caller keeps its config.
        let by_ref = bindfix_config_new();
        bindfix_config_set_id(by_ref, 3);
        assert_eq!(bindfix_methods_set_config(methods, by_ref), BindfixError::BindfixOk);
        bindfix_config_set_id(by_ref, 4);
        assert_eq!(bindfix_config_id(bindfix_methods_get_config(methods)), 3);
        bindfix_config_free(by_ref);

        // By value: the handle is consumed.
        let by_value = bindfix_config_new();
        bindfix_config_set_id(by_value, 9);
        assert_eq!(
            bindfix_methods_set_config_by_value(methods, by_value),
            BindfixError::BindfixOk
        );
        assert_eq!(bindfix_config_id(bindfix_methods_get_config(methods)), 9);

        let copy = bindfix_methods_create_config(methods);
        assert_eq!(bindfix_config_id(copy), 9);
        bindfix_config_set_id(copy, 10);
        assert_eq!(bindfix_config_id(bindfix_methods_get_config(methods)), 9);
        bindfix_config_free(copy);

        assert_eq!(bindfix_methods_add(2, 3), 5);
        assert_eq!(bindfix_methods_add(i32::MAX, 1), i32::MIN);

        bindfix_methods_free(methods);
    }
}

#[test]
fn test_containers_in_order() {
    unsafe {
        let ints = bindfix_int_container_new();
        let len = bindfix_int_container_len(ints);
        let mut seen = Vec::with_capacity(len);
        for i in 0..len {
            let mut v = 0;
            assert_eq!(bindfix_int_container_get(ints, i, &mut v), BindfixError::BindfixOk);
            seen.push(v);
        }
        assert_eq!(seen, [10, 20, 30]);
        let mut v = 0;
        assert_eq!(
            bindfix_int_container_get(ints, len, &mut v),
            BindfixError::BindfixNotFound
        );
        bindfix_int_container_free(ints);

        let configs = bindfix_config_container_new();
        assert_eq!(bindfix_config_container_len(configs), 2);
        assert_eq!(bindfix_config_id(bindfix_config_container_get(configs, 0)), 100);
        assert_eq!(bindfix_config_id(bindfix_config_container_get(configs, 1)), 200);
        assert!(bindfix_config_container_get(configs, 2).is_null());

        let mut buf = [0 as c_char; 8];
        let mut len = 0usize;
        assert_eq!(
            bindfix_config_container_label(configs, 1, buf.as_mut_ptr(), buf.len(), &mut len),
            BindfixError::BindfixOk
        );
        assert_eq!(CStr::from_ptr(buf.as_ptr()).to_str(), Ok("200"));
        bindfix_config_container_free(configs);
    }
}

#[test]
fn test_optional_fixtures() {
    unsafe {
        let chance = bindfix_chance_new();
        let mut p = 0;
        assert_eq!(bindfix_chance_probability(chance, &mut p), BindfixError::BindfixOk);
        assert_eq!(p, 75);
        bindfix_chance_set_chance(chance, false, 10);
        assert_eq!(
            bindfix_chance_probability(chance, &mut p),
            BindfixError::BindfixNotFound
        );
        bindfix_chance_set_chance(chance, true, 10);
        bindfix_chance_probability(chance, &mut p);
        assert_eq!(p, 10);
        bindfix_chance_free(chance);

        let wallet = bindfix_wallet_new();
        assert!(bindfix_wallet_config(wallet).is_null());
        let config = bindfix_config_new();
        bindfix_config_set_id(config, 77);
        assert_eq!(
            bindfix_wallet_set_config(wallet, true, config),
            BindfixError::BindfixOk
        );
        bindfix_config_free(config);
        assert_eq!(bindfix_config_id(bindfix_wallet_config(wallet)), 77);
        assert_eq!(
            bindfix_wallet_set_config(wallet, false, ptr::null()),
            BindfixError::BindfixOk
        );
        assert!(bindfix_wallet_config(wallet).is_null());
        assert_eq!(
            bindfix_wallet_set_config(wallet, true, ptr::null()),
            BindfixError::BindfixInvalidArgument
        );
        bindfix_wallet_free(wallet);
    }
}

#[test]
fn test_set_config_from_own_borrow() {
    unsafe {
        let methods = bindfix_methods_new();
        let own = bindfix_methods_get_config(methods);
        assert_eq!(bindfix_methods_set_config(methods, own), BindfixError::BindfixOk);
        let config = bindfix_methods_get_config(methods);
        assert_eq!(bindfix_config_id(config), 42);
        assert_eq!(config_name(config), "test");
        bindfix_methods_free(methods);

        let wallet = bindfix_wallet_new();
        let config = bindfix_config_new();
        bindfix_config_set_id(config, 5);
        bindfix_wallet_set_config(wallet, true, config);
        bindfix_config_free(config);
        let own = bindfix_wallet_config(wallet);
        assert_eq!(bindfix_wallet_set_config(wallet, true, own), BindfixError::BindfixOk);
        assert_eq!(bindfix_config_id(bindfix_wallet_config(wallet)), 5);
        let own = bindfix_wallet_config(wallet);
        assert_eq!(bindfix_wallet_set_config(wallet, false, own), BindfixError::BindfixOk);
        assert!(bindfix_wallet_config(wallet).is_null());
        bindfix_wallet_free(wallet);
    }
}

#[test]
fn test_map_lookups() {
    unsafe {
        let map = bindfix_map_example_new();
        assert_eq!(bindfix_map_example_int_str_len(map), 2);
        assert_eq!(bindfix_map_example_int_config_len(map), 2);

        let mut buf = [0 as c_char; 8];
        let mut len = 0usize;
        assert_eq!(
            bindfix_map_example_int_str_get(map, 2, buf.as_mut_ptr(), buf.len(), &mut len),
            BindfixError::BindfixOk
        );
        assert_eq!(CStr::from_ptr(buf.as_ptr()).to_str(), Ok("two"));
        assert_eq!(
            bindfix_map_example_int_str_get(map, 3, buf.as_mut_ptr(), buf.len(), &mut len),
            BindfixError::BindfixNotFound
        );

        assert_eq!(bindfix_config_id(bindfix_map_example_int_config_get(map, 20)), 20);
        assert!(bindfix_map_example_int_config_get(map, 30).is_null());

        let key = CString::new("one").expect("cstring");
        assert_eq!(
            bindfix_config_id(bindfix_map_example_str_config_get(map, key.as_ptr())),
            30
        );
        bindfix_map_example_free(map);
    }
}
