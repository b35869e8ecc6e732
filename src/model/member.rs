//! Member account models

shape! {
    /// Account to associate with the administrator account as a member
    pub struct AccountDetail = "AccountDetail" {
        account_id [set_account_id, with_account_id]: String as "AccountId",
        email [set_email, with_email]: String as "Email",
    }
}

shape! {
    pub struct CreateMembersRequest = "CreateMembersRequest" {
        detector_id [set_detector_id, with_detector_id]: String as "DetectorId",
        account_details [set_account_details, with_account_details]:
            Vec<AccountDetail> as "AccountDetails",
    }
}

impl CreateMembersRequest {
    /// Append one account to `AccountDetails`, creating the list if absent.
    #[must_use]
    pub fn add_account_detail(mut self, detail: AccountDetail) -> Self {
        self.account_details.get_or_insert_with(Vec::new).push(detail);
        self
    }
}

shape! {
    /// Accounts the service could not process, each with the reason
    pub struct CreateMembersResult = "CreateMembersResult" {
        unprocessed_accounts [set_unprocessed_accounts, with_unprocessed_accounts]:
            Vec<UnprocessedAccount> as "UnprocessedAccounts",
    }
}

shape! {
    pub struct UnprocessedAccount = "UnprocessedAccount" {
        account_id [set_account_id, with_account_id]: String as "AccountId",
        /// Reason the account was not processed
        result [set_result, with_result]: String as "Result",
    }
}
