use super::{
    ApportionmentView, CaseView, FeeView, GroupingView, PaymentView, RefundView, RemissionView,
};
use crate::model::{
    ApportionmentRow, CaseSnapshot, FeeRow, GroupingRow, PaymentRow, RefundRow, RemissionRow,
};

/// Assemble the nested view of a case
///
/// Fees and payments hang off their grouping by `payment_link_id`,
/// remissions off their fee by `fee_id`, apportionments off their payment by
/// `payment_id`, and refunds off their payment by reference. Rows whose
/// parent is not in the snapshot are left out. Every list is ordered by id.
pub fn map_case(snapshot: &CaseSnapshot) -> CaseView {
    let sorted = snapshot.sorted();

    let case_key = sorted
        .groupings
        .iter()
        .find_map(|g| g.ccd_case_number.clone())
        .unwrap_or_default();

    let groupings = sorted
        .groupings
        .iter()
        .map(|g| map_grouping(g, &sorted))
        .collect();

    CaseView {
        case_key,
        groupings,
    }
}

fn map_grouping(grouping: &GroupingRow, snapshot: &CaseSnapshot) -> GroupingView {
    let fees = snapshot
        .fees
        .iter()
        .filter(|f| f.payment_link_id == Some(grouping.id))
        .map(|f| map_fee(f, &snapshot.remissions))
        .collect();

    let payments = snapshot
        .payments
        .iter()
        .filter(|p| p.payment_link_id == Some(grouping.id))
        .map(|p| map_payment(p, snapshot))
        .collect();

    GroupingView {
        id: grouping.id,
        payment_reference: grouping.payment_reference.clone(),
        case_reference: grouping.case_reference.clone(),
        org_id: grouping.org_id.clone(),
        service_name: grouping.enterprise_service_name.clone(),
        date_created: grouping.date_created,
        date_updated: grouping.date_updated,
        fees,
        payments,
    }
}

fn map_fee(fee: &FeeRow, remissions: &[RemissionRow]) -> FeeView {
    FeeView {
        id: fee.id,
        code: fee.code.clone(),
        version: fee.version.clone(),
        amount: fee.fee_amount,
        calculated_amount: fee.calculated_amount,
        net_amount: fee.net_amount,
        amount_due: fee.amount_due,
        volume: fee.volume,
        reference: fee.reference.clone(),
        date_created: fee.date_created,
        date_updated: fee.date_updated,
        remissions: remissions
            .iter()
            .filter(|r| r.fee_id == Some(fee.id))
            .map(map_remission)
            .collect(),
    }
}

fn map_remission(remission: &RemissionRow) -> RemissionView {
    RemissionView {
        id: remission.id,
        hwf_reference: remission.hwf_reference.clone(),
        amount: remission.hwf_amount,
        beneficiary_name: remission.beneficiary_name.clone(),
        date_created: remission.date_created,
        date_updated: remission.date_updated,
    }
}

fn map_payment(payment: &PaymentRow, snapshot: &CaseSnapshot) -> PaymentView {
    let refunds = match &payment.reference {
        Some(reference) => snapshot
            .refunds
            .iter()
            .filter(|r| r.payment_reference.as_ref() == Some(reference))
            .map(map_refund)
            .collect(),
        None => Vec::new(),
    };

    let apportionments = snapshot
        .apportionments
        .iter()
        .filter(|a| a.payment_id == Some(payment.id))
        .map(|a| map_apportionment(a, &snapshot.fees))
        .collect();

    PaymentView {
        id: payment.id,
        reference: payment.reference.clone(),
        amount: payment.amount,
        currency: payment.currency.clone(),
        status: payment.payment_status.clone(),
        method: payment.payment_method.clone(),
        provider: payment.payment_provider.clone(),
        channel: payment.payment_channel.clone(),
        external_reference: payment.external_reference.clone(),
        customer_reference: payment.customer_reference.clone(),
        pba_number: payment.pba_number.clone(),
        payer_name: payment.payer_name.clone(),
        date_created: payment.date_created,
        date_updated: payment.date_updated,
        banked_date: payment.banked_date,
        refunds,
        apportionments,
    }
}

fn map_refund(refund: &RefundRow) -> RefundView {
    RefundView {
        id: refund.id,
        reference: refund.reference.clone(),
        amount: refund.amount,
        reason: refund.reason.clone(),
        status: refund.refund_status.clone(),
        instruction_type: refund.refund_instruction_type.clone(),
        created_by: refund.created_by.clone(),
        updated_by: refund.updated_by.clone(),
        date_created: refund.date_created,
        date_updated: refund.date_updated,
    }
}

fn map_apportionment(apportionment: &ApportionmentRow, fees: &[FeeRow]) -> ApportionmentView {
    let fee_code = apportionment
        .fee_id
        .and_then(|fee_id| fees.iter().find(|f| f.id == fee_id))
        .and_then(|f| f.code.clone());

    ApportionmentView {
        id: apportionment.id,
        fee_id: apportionment.fee_id,
        fee_code,
        amount: apportionment.apportion_amount,
        apportion_type: apportionment.apportion_type.clone(),
        call_surplus_amount: apportionment.call_surplus_amount,
        date_created: apportionment.date_created,
        date_updated: apportionment.date_updated,
    }
}
