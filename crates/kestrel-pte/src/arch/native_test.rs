// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for architecture dispatch.

use super::aarch64::DescriptorAttr;
use super::riscv::PTEFlags;
use super::x86_64::PageTableFlags;
use super::{Arch, ArchFlags, NativeFlags};
use crate::flags::MappingFlags;

#[test]
fn current_arch_matches_target() {
    #[cfg(target_arch = "x86_64")]
    assert_eq!(Arch::current(), Some(Arch::X86_64));
    #[cfg(target_arch = "aarch64")]
    assert_eq!(Arch::current(), Some(Arch::Aarch64));
    #[cfg(target_arch = "riscv64")]
    assert_eq!(Arch::current(), Some(Arch::Riscv64));
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "riscv64")))]
    assert_eq!(Arch::current(), None);
}

#[test]
fn unsupported_sets() {
    assert_eq!(Arch::X86_64.unsupported(), MappingFlags::empty());
    assert_eq!(Arch::Aarch64.unsupported(), MappingFlags::DIRTY);
    assert_eq!(
        Arch::Riscv64.unsupported(),
        MappingFlags::DEVICE | MappingFlags::UNCACHED
    );
}

#[test]
fn trait_arch_constants() {
    assert_eq!(PageTableFlags::ARCH, Arch::X86_64);
    assert_eq!(DescriptorAttr::ARCH, Arch::Aarch64);
    assert_eq!(PTEFlags::ARCH, Arch::Riscv64);
}

#[test]
fn arch_display() {
    let names: Vec<String> = Arch::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(names, ["x86_64", "aarch64", "riscv64"]);
}

#[test]
fn encode_tags_variant() {
    let flags = MappingFlags::RW | MappingFlags::USER;
    for arch in Arch::ALL {
        let native = NativeFlags::encode(arch, flags);
        assert_eq!(native.arch(), arch);
        assert_eq!(native.decode(), flags);
        assert_eq!(MappingFlags::from(native), flags);
    }
}

#[test]
fn encode_matches_adapters() {
    let flags = MappingFlags::RX | MappingFlags::GLOBAL;
    assert_eq!(
        NativeFlags::encode(Arch::X86_64, flags),
        NativeFlags::X86_64(PageTableFlags::to_native(flags))
    );
    assert_eq!(
        NativeFlags::encode(Arch::Aarch64, flags),
        NativeFlags::Aarch64(DescriptorAttr::to_native(flags))
    );
    assert_eq!(
        NativeFlags::encode(Arch::Riscv64, flags),
        NativeFlags::Riscv(PTEFlags::to_native(flags))
    );
}

#[test]
fn bits_roundtrip() {
    let flags = MappingFlags::RW | MappingFlags::ACCESSED;
    for arch in Arch::ALL {
        let native = NativeFlags::encode(arch, flags);
        assert_eq!(NativeFlags::from_bits(arch, native.bits()), native);
    }
}

#[test]
fn from_bits_discards_address_bits() {
    let raw = 0x0000_0000_4000_0000 | PageTableFlags::PRESENT.bits();
    assert_eq!(
        NativeFlags::from_bits(Arch::X86_64, raw),
        NativeFlags::X86_64(PageTableFlags::PRESENT)
    );
}

#[test]
fn encode_drops_unsupported() {
    let flags = MappingFlags::RW | MappingFlags::DEVICE;
    assert_eq!(
        NativeFlags::encode(Arch::Riscv64, flags).decode(),
        MappingFlags::RW
    );
    assert_eq!(
        NativeFlags::encode(Arch::X86_64, flags).decode(),
        flags
    );
}

#[test]
fn unreadable_request_is_not_present() {
    let flags = MappingFlags::WRITE | MappingFlags::USER;
    for arch in Arch::ALL {
        let native = NativeFlags::encode(arch, flags);
        assert!(!native.is_present(), "{arch}");
        assert_ne!(native.bits(), 0, "{arch}");
        assert_eq!(native.decode(), flags, "{arch}");
    }
}

#[test]
fn readable_request_is_present() {
    for arch in Arch::ALL {
        assert!(NativeFlags::encode(arch, MappingFlags::RO).is_present(), "{arch}");
        assert!(!NativeFlags::encode(arch, MappingFlags::empty()).is_present(), "{arch}");
    }
}
