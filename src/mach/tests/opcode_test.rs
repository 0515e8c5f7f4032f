use super::*;
use crate::lang::Kind;

#[test]
fn test_every_mnemonic_has_opcodes() {
    for mnemonic in MNEMONICS.iter() {
        assert!(mnemonic.opcodes().count() > 0, "{}", mnemonic);
    }
}

#[test]
fn test_decode_select_agree() {
    for op in OPCODES.iter() {
        assert_eq!(Opcode::decode(op.byte), Some(op));
        assert_eq!(Opcode::select(op.mnemonic, op.kinds), Some(op));
        assert_eq!(op.kinds.len(), op.mnemonic.arity());
    }
}

#[test]
fn test_dest_is_always_address() {
    for op in OPCODES.iter() {
        for (kind, param) in op.kinds.iter().zip(op.mnemonic.params()) {
            if *param == Param::Dest {
                assert_eq!(*kind, Kind::Address, "{}", op.mnemonic);
            }
        }
    }
}

#[test]
fn test_from_name() {
    assert_eq!(Mnemonic::from_name("mov"), Some(Mnemonic::Mov));
    assert_eq!(Mnemonic::from_name("Jgt"), Some(Mnemonic::Jgt));
    assert_eq!(Mnemonic::from_name("PUSH"), None);
}

#[test]
fn test_effects() {
    assert_eq!(Mnemonic::Add.effect(), Effect::Data);
    assert_eq!(Mnemonic::Jeq.effect(), Effect::Jump);
    assert_eq!(Mnemonic::Aread.effect(), Effect::Effect);
    assert_eq!(Mnemonic::Halt.arity(), 0);
}

#[test]
fn test_no_literal_destination() {
    assert_eq!(Opcode::select(Mnemonic::Mov, &[Kind::Literal, Kind::Literal]), None);
    assert_eq!(Opcode::decode(0x24).map(|op| op.mnemonic), Some(Mnemonic::Aread));
    assert_eq!(Opcode::decode(0xFE), None);
}
